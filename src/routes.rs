mod health_check;
mod helpers;
mod newsletter;
mod profile;

pub use health_check::health_check;
pub use helpers::error_chain_fmt;
pub use newsletter::{FormData, SubscribeError, add_to_newsletter, subscribe};
pub use profile::{ProfileUpdateError, dispatch_profile_update, update_profile};
