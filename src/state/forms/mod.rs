//! Form-related state types

mod errors;
mod field;
mod form_state;
mod validator;

pub use errors::*;
pub use field::*;
pub use form_state::*;
pub use validator::*;
