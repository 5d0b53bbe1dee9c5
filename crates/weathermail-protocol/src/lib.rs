//! Wire types for the weatherMail account API.

pub mod endpoints;
pub mod types;

pub use types::*;
