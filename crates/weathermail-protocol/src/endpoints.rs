//! Paths of the backend endpoints, relative to the API base address.

pub const REGISTER: &str = "/register";
pub const TOKEN: &str = "/token";
pub const UNSUBSCRIBE: &str = "/unsubscribe";
pub const RESUBSCRIBE: &str = "/resubscribe";
pub const ME: &str = "/me";
