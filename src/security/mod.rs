pub mod patterns;
pub mod validator;

pub use patterns::{DestructivePattern, destructive_patterns};
pub use validator::{CommandValidator, ValidationError};
