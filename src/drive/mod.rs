pub mod classify;
pub mod eject;
pub mod properties;
pub mod status;

pub use classify::classify;
pub use eject::Ejector;
pub use properties::{Properties, PropertyStore, UdevStore};
pub use status::{CdromIoctl, StatusProbe};
