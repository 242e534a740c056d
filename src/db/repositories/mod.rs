pub mod equipment;
pub mod user;
