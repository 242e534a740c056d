pub mod auth_service;
pub use auth_service::{AuthError, AuthService, LoginResult, UserSummary};

pub mod auth_service_impl;
pub use auth_service_impl::SeaOrmAuthService;

pub mod equipment_service;
pub use equipment_service::{EquipmentError, EquipmentService};

pub mod equipment_service_impl;
pub use equipment_service_impl::SeaOrmEquipmentService;
