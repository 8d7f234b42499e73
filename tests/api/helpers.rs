use once_cell::sync::Lazy;
use pitchboard::configuration::get_configuration;
use pitchboard::startup::Application;
use pitchboard::telemetry::{get_subscriber, init_subscriber};
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // We cannot assign the output of `get_subscriber` to a variable based on the value TEST_LOG because
    // the sink is part of the type returned by `get_subscriber`, therefore they are not the same type.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    /// Stands in for the content API.
    pub content_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_home(&self, query: Option<&str>) -> reqwest::Response {
        let mut request = self.api_client.get(&format!("{}/", &self.address));
        if let Some(query) = query {
            request = request.query(&[("query", query)]);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_home_html(&self, query: Option<&str>) -> String {
        self.get_home(query).await.text().await.unwrap()
    }

    pub async fn get_create_form(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/startup/create", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_create_form_html(&self) -> String {
        self.get_create_form().await.text().await.unwrap()
    }

    pub async fn post_pitch<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/startup/create", &self.address))
            // This `reqwest` method makes sure that the body is URL-encoded and the
            // `Content-Type` header is set accordingly.
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_pitch(&self, id: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/startup/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_pitch_html(&self, id: &str) -> String {
        self.get_pitch(id).await.text().await.unwrap()
    }

    /// Render a fresh form and read the id it was given.
    pub async fn new_form_id(&self) -> String {
        form_id_from(&self.get_create_form_html().await)
    }
}

/// No need to propagate errors here: if we fail to perform the required setup we can just panic
/// and crash all the things.
pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed. All other
    // invocations will instead skip execution.
    Lazy::force(&TRACING);

    let content_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.content_api.base_url = content_server.uri();
        c.content_api.timeout_milliseconds = 2_000;
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let address = format!("http://127.0.0.1:{}", port);
    // launch the server as a background task
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address,
        content_server,
        api_client,
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}

/// Read the hidden `form_id` input out of a rendered submission form.
pub fn form_id_from(html: &str) -> String {
    let marker = r#"name="form_id" value=""#;
    let start = html.find(marker).expect("No form_id in the page") + marker.len();
    let end = start + html[start..].find('"').expect("Unterminated form_id");
    html[start..end].to_string()
}

/// One pitch, the way the content API returns it.
pub fn pitch_json(id: &str, title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "_createdAt": "2024-11-03T10:15:00Z",
        "views": 55,
        "author": { "_id": 1, "name": "John" },
        "description": "This is a description",
        "image": "https://images.example.com/cover.jpeg",
        "category": category,
        "title": title,
        "pitch": "We build things people want"
    })
}
