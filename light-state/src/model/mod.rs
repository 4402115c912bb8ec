//! Data model for light state

pub mod change;
pub mod light;
pub mod light_id;
pub mod snapshot;

pub use change::{ChangeEvent, FieldChange, Removed};
pub use light::{Light, LightField};
pub use light_id::LightId;
pub use snapshot::Snapshot;
