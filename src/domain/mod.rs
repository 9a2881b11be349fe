mod link;
mod new_subscriber;
mod profile_update;
mod subscriber_email;

pub use link::{Link, LinkDraft, pair_link_fields, parse_links, reconcile_links};
pub use new_subscriber::NewSubscriber;
pub use profile_update::{ProfileUpdateEvent, ProfileUpdateRequest};
pub use subscriber_email::SubscriberEmail;
