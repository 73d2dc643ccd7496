// Capability contract for widgets adjustable through skinning.

use crate::anchor::Anchor;

/// A widget whose placement can be adjusted via skinning.
///
/// While [`using_closest_anchor`](Self::using_closest_anchor) is true the
/// component's anchor follows proximity automatically; a user override
/// pins it and turns the flag off.
pub trait SkinnableComponent {
    /// Whether an end user may edit this component in the skin editor.
    fn is_editable(&self) -> bool {
        true
    }

    fn using_closest_anchor(&self) -> bool;

    fn set_using_closest_anchor(&mut self, value: bool);

    /// The proximity-chosen anchor for a component at `(x, y)` inside a
    /// parent of the given size, or `None` while the anchor is pinned.
    fn anchor_for_position(&self, x: f32, y: f32, parent_w: f32, parent_h: f32) -> Option<Anchor> {
        self.using_closest_anchor()
            .then(|| Anchor::closest_to(x, y, parent_w, parent_h))
    }
}
