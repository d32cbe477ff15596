pub mod entities;
pub mod errors;
pub mod rules;
pub mod validator;

pub use errors::ValidationFailure;
pub use rules::Rule;
pub use rules::RuleSet;
pub use validator::Validator;
