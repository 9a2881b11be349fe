use crate::configuration::Settings;
use crate::event_client::EventClient;
use crate::newsletter_client::NewsletterClient;
use crate::routes::{health_check, subscribe, update_profile};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let event_client = config.event_client.client()?;
        let newsletter_client = config.newsletter_client.client()?;

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, event_client, newsletter_client)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Both clients are built once and shared by every worker.
pub fn run(
    listener: TcpListener,
    event_client: EventClient,
    newsletter_client: NewsletterClient,
) -> Result<Server, anyhow::Error> {
    let event_client = web::Data::new(event_client);
    let newsletter_client = web::Data::new(newsletter_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/_actions/user.updateProfile", web::post().to(update_profile))
            .route("/_actions/newsletter.subscribe", web::post().to(subscribe))
            .app_data(event_client.clone())
            .app_data(newsletter_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
