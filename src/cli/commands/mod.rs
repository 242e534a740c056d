mod hash_password;
mod list;
mod seed;

pub use hash_password::cmd_hash_password;
pub use list::cmd_list_equipment;
pub use seed::cmd_seed;
