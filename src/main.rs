use std::net::TcpListener;

use anyhow::Context;

use filmfest::app;
use filmfest::repo::Repo;
use filmfest::settings::Settings;
use filmfest::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    let directive = telemetry::filter_directive(&settings.log);
    let subscriber = telemetry::create_subscriber(&directive, std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let repo = Repo::connect(&settings.database).await;

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    app::run(listener, repo)?.await.context("Failed to run app")
}
