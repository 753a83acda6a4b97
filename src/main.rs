//! Renders a JSON snapshot of both dashboards for the configured user.

use std::error::Error;

use serde::Serialize;
use tracing::info;

use hireboard::adapters::build_project_store;
use hireboard::application::DashboardController;
use hireboard::config::{AppConfig, LogFormat};
use hireboard::domain::dashboard::{
    ClientRole, ClientView, DashboardViewModel, ProviderRole, ProviderView,
};
use hireboard::domain::foundation::UserId;
use hireboard::domain::project::{CommissionedProject, HiredProject};

#[derive(Serialize)]
struct Snapshot {
    provider: DashboardViewModel<HiredProject, ProviderView>,
    client: DashboardViewModel<CommissionedProject, ClientView>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = config.logging.env_filter();
    match config.logging.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    let user_id = UserId::new(config.dashboard.snapshot_user.trim())?;
    let store = build_project_store(&config.store, &user_id).await;

    let mut provider = DashboardController::<ProviderRole>::with_initial_view(
        store.clone(),
        user_id.clone(),
        config.dashboard.default_provider_view,
    );
    let mut client = DashboardController::<ClientRole>::with_initial_view(
        store,
        user_id.clone(),
        config.dashboard.default_client_view,
    );
    provider.reload().await;
    client.reload().await;

    let snapshot = Snapshot {
        provider: provider.view_model(),
        client: client.view_model(),
    };
    info!(user = %user_id, "rendering dashboard snapshot");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
