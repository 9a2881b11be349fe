mod errors;
mod profile_handler;

pub use errors::ProfileUpdateError;
pub use profile_handler::{dispatch_profile_update, update_profile};
