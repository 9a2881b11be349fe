use serde::Serialize;

use super::link::{Link, LinkDraft, pair_link_fields, parse_links};

const LINK_LABEL_FIELD: &str = "link_label[]";
const LINK_URL_FIELD: &str = "link_url[]";

/// A validated profile edit. The form's parallel link fields are already
/// paired into drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdateRequest {
    pub id: String,
    pub username: String,
    pub bio: Option<String>,
    pub links: Vec<LinkDraft>,
}

impl ProfileUpdateRequest {
    /// Builds the request from decoded form fields in submission order.
    ///
    /// Scalar fields keep their first occurrence, the bracketed link fields
    /// collect every occurrence. Unknown fields are ignored.
    pub fn parse(fields: Vec<(String, String)>) -> Result<Self, String> {
        let mut id = None;
        let mut username = None;
        let mut bio = None;
        let mut labels = Vec::new();
        let mut urls = Vec::new();

        for (key, value) in fields {
            match key.as_str() {
                "id" => {
                    id.get_or_insert(value);
                }
                "username" => {
                    username.get_or_insert(value);
                }
                "bio" => {
                    bio.get_or_insert(value);
                }
                LINK_LABEL_FIELD => labels.push(value),
                LINK_URL_FIELD => urls.push(value),
                _ => {}
            }
        }

        let id = required(id, "id")?;
        let username = required(username, "username")?;

        Ok(Self {
            id,
            username,
            bio: bio.filter(|bio| !bio.is_empty()),
            links: pair_link_fields(labels, urls),
        })
    }
}

/// A submitted but empty value counts as missing.
fn required(value: Option<String>, field: &str) -> Result<String, String> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| format!("The `{field}` field is required."))
}

impl TryFrom<Vec<(String, String)>> for ProfileUpdateRequest {
    type Error = String;

    fn try_from(value: Vec<(String, String)>) -> Result<Self, Self::Error> {
        ProfileUpdateRequest::parse(value)
    }
}

/// Desired profile state, the payload of the profile update event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdateEvent {
    pub id: String,
    pub username: String,
    pub bio: String,
    pub links: Vec<Link>,
}

impl From<ProfileUpdateRequest> for ProfileUpdateEvent {
    fn from(request: ProfileUpdateRequest) -> Self {
        Self {
            id: request.id,
            username: request.username,
            bio: request.bio.unwrap_or_default(),
            links: parse_links(request.links),
        }
    }
}
