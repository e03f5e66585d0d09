use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use std::net::SocketAddr;
use subtrack::{
    configuration::get_configuration,
    startup::Application,
    store::SubscriptionStore,
    telemetry::{get_subscriber, init_subscriber},
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let default_env_filter = "info";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::sink);
        init_subscriber(subscriber);
    }
});

static FAILED_TO_EXECUTE_REQUEST: &str = "Failed to execute request";

pub struct TestApp {
    pub address: SocketAddr,
    pub store: SubscriptionStore,
    client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Lazy::force(&TRACING);

        let mut config = get_configuration().expect("Failed to read configuration");
        config.application.port = 0;

        let store = SubscriptionStore::new();
        let app = Application::build(config, store.clone())
            .await
            .expect("Failed to build application");
        let address = app.local_addr();

        tokio::spawn(app.run_until_stopped());

        Self {
            address,
            store,
            client: Client::new(),
        }
    }

    pub async fn get_health_check(&self) -> Response {
        self.client
            .get(self.url("/health_check"))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn get_subscription(&self, username: &str) -> Response {
        self.client
            .get(self.url(&format!("/subscriptions/{username}")))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn post_subscription(&self, body: &serde_json::Value) -> Response {
        self.client
            .post(self.url("/subscriptions"))
            .json(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn put_subscription(&self, username: &str, body: &serde_json::Value) -> Response {
        self.client
            .put(self.url(&format!("/subscriptions/{username}")))
            .json(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn delete_subscription(&self, username: &str) -> Response {
        self.client
            .delete(self.url(&format!("/subscriptions/{username}")))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("http://{}{endpoint}", self.address)
    }
}
