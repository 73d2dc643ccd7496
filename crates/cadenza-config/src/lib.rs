// Client configuration: skin selection and per-component overrides.

mod config;
mod skin_config;

pub use config::Config;
pub use skin_config::{ComponentOverride, SceneKind, SkinConfig};
