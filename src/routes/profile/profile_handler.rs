use actix_web::{HttpResponse, web};
use anyhow::Context;

use super::errors::ProfileUpdateError;
use crate::{
    domain::{ProfileUpdateEvent, ProfileUpdateRequest},
    event_client::{EventClient, EventSender, PROFILE_UPDATE_EVENT, SendEventAck},
};

/// `POST /_actions/user.updateProfile`
///
/// The form is decoded as raw key/value pairs because `link_label[]` and
/// `link_url[]` repeat once per link.
#[tracing::instrument(
    name = "Updating a user profile",
    skip(form, event_client),
    fields(user_id = tracing::field::Empty, username = tracing::field::Empty)
)]
pub async fn update_profile(
    form: web::Form<Vec<(String, String)>>,
    event_client: web::Data<EventClient>,
) -> Result<HttpResponse, ProfileUpdateError> {
    let request: ProfileUpdateRequest = form
        .into_inner()
        .try_into()
        .map_err(ProfileUpdateError::ValidationError)?;

    tracing::Span::current().record("user_id", tracing::field::display(&request.id));
    tracing::Span::current().record("username", tracing::field::display(&request.username));

    let ack = dispatch_profile_update(event_client.get_ref(), request).await?;

    Ok(HttpResponse::Ok().json(ack))
}

/// Reconciles the submitted links and emits exactly one profile update
/// event. The acknowledgment is returned as the event api produced it.
#[tracing::instrument(name = "Dispatching a profile update event", skip_all)]
pub async fn dispatch_profile_update<E>(
    events: &E,
    request: ProfileUpdateRequest,
) -> Result<SendEventAck, ProfileUpdateError>
where
    E: EventSender,
{
    let event = ProfileUpdateEvent::from(request);
    tracing::debug!(links = event.links.len(), "Profile links reconciled");

    let ack = events
        .send(PROFILE_UPDATE_EVENT, &event)
        .await
        .context("Failed to dispatch the profile update event.")?;

    Ok(ack)
}
