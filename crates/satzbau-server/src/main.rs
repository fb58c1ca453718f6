use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use satzbau_server::{AppState, router};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_MAX_COUNT: usize = 100;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config();
    info!("binding to {}:{}", config.host, config.port);
    info!("max sentences per request: {}", config.max_count);
    if let Some(seed) = config.seed {
        info!("fixed seed {seed}; responses are reproducible");
    }

    let vocabulary = match &config.vocab_path {
        Some(path) => {
            let start = Instant::now();
            let entries = satzbau_vocab::load(path)?;
            info!(
                "vocabulary loaded from {} in {} ms",
                path.display(),
                start.elapsed().as_millis()
            );
            entries
        }
        None => {
            warn!("no VOCAB_PATH set; only POST /v1/exercises/{{kind}} will produce sentences");
            Vec::new()
        }
    };

    let state = AppState {
        vocabulary: Arc::new(vocabulary),
        max_count: config.max_count,
        seed: config.seed,
    };

    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    host: String,
    port: u16,
    vocab_path: Option<PathBuf>,
    max_count: usize,
    seed: Option<u64>,
}

fn load_config() -> Config {
    let mut cli_vocab: Option<PathBuf> = None;
    let mut cli_seed: Option<u64> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--vocab" => {
                if let Some(path) = args.next() {
                    cli_vocab = Some(PathBuf::from(path));
                }
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--vocab=") {
                    cli_vocab = Some(PathBuf::from(path));
                } else if let Some(seed) = arg.strip_prefix("--seed=") {
                    cli_seed = seed.parse().ok();
                }
            }
        }
    }

    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let vocab_path = cli_vocab.or_else(|| env::var("VOCAB_PATH").ok().map(PathBuf::from));
    let max_count = env::var("MAX_COUNT")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_MAX_COUNT);
    let seed = cli_seed.or_else(|| {
        env::var("SATZBAU_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
    });

    Config {
        host,
        port,
        vocab_path,
        max_count,
        seed,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
