mod errors;
mod subscribe_handler;
mod types;

pub use errors::SubscribeError;
pub use subscribe_handler::{add_to_newsletter, subscribe};
pub use types::FormData;
