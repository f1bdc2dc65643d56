use anyhow::Context;
use api::routes;
use catalog::ModelCatalog;
use clap::Parser;
use driftcore::dataset::DatasetHandle;
use driftcore::prediction::TrajectoryPredictor;
use generator::drift::DriftModel;
use log::info;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::ServiceConfig;
use workflow::runner::Runner;

mod api;
mod catalog;
mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Maritime particle lookup and trajectory prediction service")]
struct Args {
    /// Load the service config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Particle dataset file (overrides the config)
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Directory holding one folder per model
    #[arg(long)]
    models_dir: Option<PathBuf>,
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// Load the dataset before serving and exit if it is unreadable
    #[arg(long, default_value_t = false)]
    eager: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match args.config.as_ref() {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    }
    .with_overrides(args.dataset, args.models_dir, args.bind, args.eager);

    let runtime = TokioBuilder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating service runtime")?;
    runtime.block_on(serve(config))
}

async fn serve(config: ServiceConfig) -> anyhow::Result<()> {
    let dataset = if config.eager_load {
        DatasetHandle::eager(&config.dataset_path).with_context(|| {
            format!("loading particle dataset {}", config.dataset_path.display())
        })?
    } else {
        DatasetHandle::lazy(&config.dataset_path)
    };

    let model = Arc::new(DriftModel::new(config.drift.clone()));
    let runner = Runner::new(&config, Arc::new(dataset), TrajectoryPredictor::new(model));
    let catalog = ModelCatalog::new(&config.models_dir);
    info!("model catalog at {}", catalog.root().display());

    let (addr, server) = warp::serve(routes(Arc::new(runner), Arc::new(catalog)))
        .try_bind_with_graceful_shutdown(config.bind, async {
            if let Err(err) = signal::ctrl_c().await {
                log::error!("awaiting Ctrl+C: {}", err);
            }
        })
        .with_context(|| format!("binding {}", config.bind))?;

    info!("serving on http://{} (Ctrl+C to stop)", addr);
    server.await;
    info!("shutdown complete");
    Ok(())
}
