use crate::configuration::Settings;
use crate::content_client::ContentClient;
use crate::in_flight::InFlightSubmissions;
use crate::routes;
use actix_web::cookie::Key;
use actix_web::{dev::Server, web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::{ExposeSecret, Secret};
use std::io::ErrorKind;
use std::net::TcpListener;
use tera::Tera;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let timeout = configuration.content_api.timeout();
        let content_client = ContentClient::new(
            configuration.content_api.base_url,
            configuration.content_api.authorization_token,
            timeout,
        )
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)?;
        // Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        tracing::info!(port, "Starting the pitch board");
        let server = run(
            listener,
            content_client,
            configuration.application.hmac_secret,
        )?;

        // We "save" the bound port in one of `Application`'s fields.
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the
    /// application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Templates are compiled into the binary: the server does not depend on the directory it is
/// started from. Files ending in `.html` are autoescaped.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("home.html", include_str!("../templates/home.html")),
        ("pitch_form.html", include_str!("../templates/pitch_form.html")),
        ("pitch_detail.html", include_str!("../templates/pitch_detail.html")),
    ])?;
    Ok(tera)
}

pub fn run(
    listener: TcpListener,
    content_client: ContentClient,
    hmac_secret: Secret<String>,
) -> Result<Server, std::io::Error> {
    let templates =
        load_templates().map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

    // `web::Data` wraps its content in an `Arc`: every worker shares the same instance.
    let content_client = web::Data::new(content_client);
    let templates = web::Data::new(templates);
    let in_flight = web::Data::new(InFlightSubmissions::default());

    let message_store =
        CookieMessageStore::builder(Key::from(hmac_secret.expose_secret().as_bytes())).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            // Middlewares are added using the `wrap` method on `App`
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .route("/", web::get().to(routes::home))
            // Registered before `/startup/{id}`: routes are matched in order.
            .route("/startup/create", web::get().to(routes::pitch_form))
            .route("/startup/create", web::post().to(routes::submit_pitch))
            .route("/startup/{id}", web::get().to(routes::pitch_detail))
            .app_data(content_client.clone())
            .app_data(templates.clone())
            .app_data(in_flight.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
