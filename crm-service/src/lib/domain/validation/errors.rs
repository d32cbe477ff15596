use thiserror::Error;

/// One or more field rules violated during a validation pass.
///
/// Carries the accumulated messages in the order the checks ran. Always
/// user-facing; the boundary maps it to a 4xx response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", .messages.join("; "))]
pub struct ValidationFailure {
    pub messages: Vec<String>,
}
