//! Application layer - DTOs and use cases

pub mod dtos;
pub mod init;
pub mod manage_config;
pub mod schema;
pub mod validate_payload;

pub use manage_config::ConfigService;
pub use schema::Schema;
pub use validate_payload::ValidatePayloadService;
