pub mod errors;
pub mod models;
pub mod ports;

pub use models::User;
pub use models::UserId;
pub use models::UserRole;
pub use ports::UserRepository;
