pub mod page;
pub mod token_store;

pub use page::{MessageArea, MessageColor, PageSnapshot, PageState, StatusMessage};
pub use token_store::{TokenStore, TokenStoreError};
