use subtrack::{
    configuration::get_configuration,
    startup::Application,
    store::SubscriptionStore,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("subtrack".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let store = SubscriptionStore::new();

    let app = Application::build(configuration, store).await?;
    app.run_until_stopped().await?;

    Ok(())
}
