pub mod errors;
pub mod service;

pub use errors::AuthError;
pub use service::AuthService;
