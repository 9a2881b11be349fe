use crate::domain::NewSubscriber;

#[derive(serde::Deserialize)]
pub struct FormData {
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub email: String,
}

impl TryFrom<FormData> for NewSubscriber {
    type Error = String;

    fn try_from(value: FormData) -> Result<Self, Self::Error> {
        NewSubscriber::parse(value.first_name, value.email)
    }
}
