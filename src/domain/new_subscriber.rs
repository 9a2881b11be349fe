use super::SubscriberEmail;

/// A newsletter sign-up that passed validation.
#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub first_name: String,
    pub email: SubscriberEmail,
}

impl NewSubscriber {
    pub fn parse(first_name: String, email: String) -> Result<Self, String> {
        if first_name.is_empty() {
            return Err("The `firstName` field is required.".to_string());
        }
        let email = SubscriberEmail::parse(email)?;
        Ok(Self { first_name, email })
    }
}
