use crate::{
    app_state::AppState,
    configuration::Settings,
    routes::{health_check, subscriptions},
    store::SubscriptionStore,
    telemetry::{request_span, RequestUuid},
};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub struct Application {
    local_addr: SocketAddr,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(
        configuration: Settings,
        store: SubscriptionStore,
    ) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address).await?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            local_addr,
            listener,
            router: router(store),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Listening on {}", self.local_addr);
        axum::serve(self.listener, self.router).await
    }
}

fn router(store: SubscriptionStore) -> Router {
    Router::new()
        .merge(health_check::router())
        .merge(subscriptions::router())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(RequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(AppState { store })
}
