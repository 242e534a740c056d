pub mod prelude;

pub mod equipment;
pub mod users;
