//! kswitch - keyboard-driven resource switcher for Kubernetes dashboards
//!
//! Press the platform hotkey anywhere in the dashboard to jump to a
//! namespace, a built-in view or a custom resource type.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use kswitch::config::ConfigLoader;
use kswitch::store::{CustomResourceType, Namespace, ObjectStore};
use kswitch::tui::{App, Theme, run_tui};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle config subcommand
    if let Some(Command::Config { subcommand }) = args.command {
        return cli::handle_config_command(subcommand).await;
    }

    // Initialize logging if debug flag is set
    let log_file = cli::init_logging(args.debug);

    // Print log file location to stderr before starting TUI (so it doesn't interfere)
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    // Load configuration
    let config = ConfigLoader::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration: {:#}, using defaults", e);
        ConfigLoader::load_defaults()
    });
    tracing::debug!(
        "Configuration loaded: debounceMs={}, preloadOnOpen={}, platform={}",
        config.switcher.debounce_ms,
        config.switcher.preload_on_open,
        config.hotkey.platform
    );

    let context: String;
    let namespaces: Arc<dyn ObjectStore<Namespace>>;
    let crds: Arc<dyn ObjectStore<CustomResourceType>>;
    if args.demo {
        tracing::debug!("Using demo stores");
        let (demo_namespaces, demo_crds) = cli::demo_stores();
        context = "demo".to_string();
        namespaces = Arc::new(demo_namespaces);
        crds = Arc::new(demo_crds);
    } else {
        // Initialize Kubernetes client
        tracing::debug!("Initializing Kubernetes client");
        let client = kswitch::kube::create_client().await?;
        context = kswitch::kube::get_context();
        tracing::info!("Connected to Kubernetes cluster: {}", context);

        namespaces = Arc::new(kswitch::kube::KubeNamespaceStore::new(client.clone()));
        crds = Arc::new(kswitch::kube::KubeCrdStore::new(client));
    }

    let app = App::new(context, namespaces, crds, &config, Theme::default());
    run_tui(app).await?;

    Ok(())
}
