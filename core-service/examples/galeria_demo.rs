//! Walks through a short app session on the desktop shims and prints the
//! events a renderer would receive.
//!
//! ```text
//! cargo run -p core-service --example galeria_demo
//! RUST_LOG=core_playback=debug cargo run -p core-service --example galeria_demo
//! ```

use bridge_traits::LogLevel;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use core_service::{AssetManifest, GaleriaConfig, GaleriaCore, Screen};

const MANIFEST: &str = include_str!("../assets/manifest.json");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut logging = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Info)
        .with_thread_info(true);
    if let Ok(filter) = std::env::var("RUST_LOG") {
        logging = logging.with_filter(filter);
    }
    init_logging(logging)?;

    let manifest = AssetManifest::from_json(MANIFEST)?;
    let core = GaleriaCore::new(GaleriaConfig::builder().manifest(manifest).build()?)?;
    let mut events = core.subscribe();

    let title = &core.presentation().title;
    println!("{} by {}", title, core.presentation().subtitle);
    for link in core.links() {
        println!("  {} -> {}", link.label, link.url);
    }

    core.start().wait().await;

    core.go_to(Screen::PhotoGallery);
    for _ in 0..3 {
        core.next();
    }
    core.previous();
    println!("Photo on screen: {}", core.current_photo());

    core.go_to(Screen::VideoGallery);
    core.next();
    println!("Video on screen: {}", core.current_video());

    core.go_to(Screen::Cover);
    println!("{}", serde_json::to_string_pretty(&core.view())?);

    core.shutdown();

    while let Some(Ok(event)) = events.try_recv() {
        println!("[{:?}] {}", event.severity(), event.description());
    }

    Ok(())
}
