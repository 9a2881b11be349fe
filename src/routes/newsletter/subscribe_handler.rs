use actix_web::{HttpResponse, web};
use anyhow::Context;

use super::{errors::SubscribeError, types::FormData};
use crate::{
    domain::NewSubscriber,
    newsletter_client::{NewsletterClient, Subscriber, SubscriptionApi},
};

/// `POST /_actions/newsletter.subscribe`
#[tracing::instrument(
    name = "Subscribing to the newsletter",
    skip(form, newsletter_client),
    fields(
        subscriber_email = %form.email,
        subscriber_first_name = %form.first_name
    )
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    newsletter_client: web::Data<NewsletterClient>,
) -> Result<HttpResponse, SubscribeError> {
    let new_subscriber: NewSubscriber = form
        .into_inner()
        .try_into()
        .map_err(SubscribeError::ValidationError)?;

    let subscriber = add_to_newsletter(newsletter_client.get_ref(), &new_subscriber).await?;

    Ok(HttpResponse::Ok().json(subscriber))
}

/// One upstream call per invocation; repeated sign-ups are left to the
/// provider to deduplicate.
#[tracing::instrument(name = "Forwarding a new subscriber", skip_all)]
pub async fn add_to_newsletter<S>(
    api: &S,
    new_subscriber: &NewSubscriber,
) -> Result<Subscriber, SubscribeError>
where
    S: SubscriptionApi,
{
    let subscriber = api
        .add_subscriber(&new_subscriber.first_name, &new_subscriber.email)
        .await
        .context("Failed to add the subscriber to the newsletter.")?;

    tracing::info!(subscriber_id = ?subscriber.id(), "Subscriber added");
    Ok(subscriber)
}
