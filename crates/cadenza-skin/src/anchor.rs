// Anchor grid for skinnable component placement.

use serde::{Deserialize, Serialize};

/// Nine-position anchor grid used to pin a component to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    TopCentre,
    TopRight,
    CentreLeft,
    #[default]
    Centre,
    CentreRight,
    BottomLeft,
    BottomCentre,
    BottomRight,
}

/// Row-major grid order, also the tie-break order for proximity lookup.
const ANCHORS: [Anchor; 9] = [
    Anchor::TopLeft,
    Anchor::TopCentre,
    Anchor::TopRight,
    Anchor::CentreLeft,
    Anchor::Centre,
    Anchor::CentreRight,
    Anchor::BottomLeft,
    Anchor::BottomCentre,
    Anchor::BottomRight,
];

impl Anchor {
    /// Relative (x, y) placement factors in 0.0-1.0 parent space.
    pub fn offset_factors(self) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopCentre => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::CentreLeft => (0.0, 0.5),
            Self::Centre => (0.5, 0.5),
            Self::CentreRight => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomCentre => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }

    /// Absolute anchor point inside a parent of the given size.
    pub fn position_in(self, parent_w: f32, parent_h: f32) -> (f32, f32) {
        let (fx, fy) = self.offset_factors();
        (fx * parent_w, fy * parent_h)
    }

    /// The anchor closest to the given point inside a parent of the
    /// given size. Ties resolve to the earliest anchor in row-major
    /// grid order.
    pub fn closest_to(x: f32, y: f32, parent_w: f32, parent_h: f32) -> Anchor {
        let mut best = Anchor::TopLeft;
        let mut best_distance = f32::INFINITY;

        for anchor in ANCHORS {
            let (ax, ay) = anchor.position_in(parent_w, parent_h);
            let distance = (x - ax) * (x - ax) + (y - ay) * (y - ay);
            if distance < best_distance {
                best = anchor;
                best_distance = distance;
            }
        }

        best
    }

    /// All anchors in row-major grid order.
    pub fn all() -> [Anchor; 9] {
        ANCHORS
    }
}
