use anyhow::Result;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weathermail_client::config::ClientConfig;
use weathermail_client::controller::FormController;
use weathermail_client::network::ApiClient;
use weathermail_client::state::{PageState, TokenStore};
use weathermail_client::ui::WeatherMailApp;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weathermail=debug,weathermail_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting weatherMail client...");

    let config = ClientConfig::load()?;
    tracing::info!("Using backend at {}", config.api_base_url);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let api = ApiClient::from_config(&config)?;
    let tokens = TokenStore::open(config.token_path.clone());
    let controller = FormController::new(api, tokens, PageState::new());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 760.0])
            .with_min_inner_size([380.0, 520.0])
            .with_title("weatherMail"),
        ..Default::default()
    };

    eframe::run_native(
        "weatherMail",
        options,
        Box::new(move |cc| Ok(Box::new(WeatherMailApp::new(cc, runtime, controller)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))?;

    Ok(())
}
