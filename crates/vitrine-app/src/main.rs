use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vitrine_config::VitrineConfig;
use vitrine_window::VitrineWindow;

mod app;
mod demos;

use app::GalleryApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = VitrineConfig::load();
    tracing::info!(
        autoplay = config.gallery.autoplay,
        "starting gallery: {}",
        config.window.title
    );

    let window = VitrineWindow::new(
        &config.window.title,
        config.window.width,
        config.window.height,
    )?;
    let app = GalleryApp::new(config)?;
    window.run(app)
}
