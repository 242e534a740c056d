//! Password hashing, bearer token issuance and request authorization.

pub mod middleware;
pub mod password;
pub mod token;

pub use middleware::{Unauthorized, authorize};
pub use token::{Claims, TokenService, TokenValidation};
