pub mod equipment;
pub mod user;

pub use equipment::{Area, Criticality, Equipment, EquipmentFilter, NewEquipment, Status};
pub use user::{Role, User};
