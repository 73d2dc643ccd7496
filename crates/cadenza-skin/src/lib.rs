// Skinning capability surface: anchors and the skinnable-component
// contract.

mod anchor;
mod skinnable;

pub use anchor::Anchor;
pub use skinnable::SkinnableComponent;
