//! Entry point for the Mhara Sangeet map viewer.
//!
//! This Dioxus desktop application shows Rajasthan's regional folk music on
//! an interactive map. Leaflet is declared in the window head at launch and
//! brought up by a fallible setup step once the map container mounts.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use sangeet_core::{Catalog, RegionId, SangeetError, ViewerConfig};
use sangeet_viewer::components::App;
use sangeet_viewer::state::AppState;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Launch state handed to the root component.
static LAUNCH: OnceLock<(ViewerConfig, AppState)> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "sangeet-viewer")]
#[command(about = "Interactive map of Rajasthan's regional folk music")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial map zoom level
    #[arg(short, long)]
    zoom: Option<u8>,

    /// Region id to select at startup
    #[arg(short, long)]
    select: Option<RegionId>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!("Starting Mhara Sangeet viewer");

    let (config, state) = match prepare(&args) {
        Ok(launch) => launch,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let window = config.window.clone();
    let head = custom_head(&config);
    LAUNCH.set((config, state)).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(window.title)
                        .with_inner_size(LogicalSize::new(window.width, window.height))
                        .with_resizable(true),
                )
                .with_custom_head(head),
        )
        .launch(RootApp);

    ExitCode::SUCCESS
}

/// Loads config, applies CLI overrides, and validates the initial selection.
fn prepare(args: &Args) -> Result<(ViewerConfig, AppState), SangeetError> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            ViewerConfig::from_file(path)?
        }
        None => ViewerConfig::default(),
    };

    if let Some(zoom) = args.zoom {
        config.map.initial_zoom = zoom;
        config.validate()?;
    }

    let catalog = Catalog::rajasthan();
    let state = AppState::with_selection(catalog, args.select)?;
    tracing::info!(
        regions = catalog.len(),
        traditions = catalog.tradition_count(),
        "Catalog loaded"
    );
    Ok((config, state))
}

/// Window head: Leaflet assets plus the embedded stylesheet.
fn custom_head(config: &ViewerConfig) -> String {
    format!(
        r#"
        <link rel="stylesheet" href="{css}" crossorigin="">
        <script src="{js}" crossorigin=""></script>
        <style>{styles}</style>
        "#,
        css = config.leaflet.stylesheet_url,
        js = config.leaflet.script_url,
        styles = STYLES_CSS,
    )
}

/// Root component that owns the application state.
#[component]
fn RootApp() -> Element {
    let (config, initial) = LAUNCH
        .get()
        .cloned()
        .unwrap_or_else(|| (ViewerConfig::default(), AppState::default()));

    let state = use_signal(move || initial);

    use_drop(|| {
        tracing::info!("Shutting down Mhara Sangeet viewer");
    });

    rsx! {
        App { state, config }
    }
}
