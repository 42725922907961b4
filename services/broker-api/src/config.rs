//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use landsat_catalog::DEFAULT_LANDSAT_HOST;
use tides::DEFAULT_TIDE_URL;

/// Imagery broker API server
#[derive(Parser, Debug, Clone)]
#[command(name = "broker-api")]
#[command(about = "Resolves satellite scene IDs to band URLs and ranks candidate scenes")]
pub struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080", env = "BROKER_LISTEN_ADDR")]
    pub listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Number of worker threads
    #[arg(long, env = "BROKER_WORKER_THREADS")]
    pub worker_threads: Option<usize>,

    /// Host serving `c1/L8/scene_list.gz`
    #[arg(long, env = "LANDSAT_HOST")]
    pub landsat_host: Option<String>,

    /// Read the scene list from a local gzip file instead of over HTTP
    #[arg(long, env = "SCENE_LIST_FILE")]
    pub scene_list_file: Option<PathBuf>,

    /// Seconds between catalog refreshes
    #[arg(long, default_value = "3600", env = "CATALOG_REFRESH_SECS")]
    pub refresh_secs: u64,

    /// Seconds to wait for the first catalog refresh before serving
    #[arg(long, default_value = "30", env = "CATALOG_WARMUP_TIMEOUT_SECS")]
    pub warmup_timeout_secs: u64,

    /// HTTP timeout for fetching the scene list
    #[arg(long, default_value = "120", env = "CATALOG_FETCH_TIMEOUT_SECS")]
    pub fetch_timeout_secs: u64,

    /// Tide prediction service endpoint
    #[arg(long, env = "BF_TIDE_PREDICTION_URL")]
    pub tide_url: Option<String>,

    /// HTTP timeout for tide predictions
    #[arg(long, default_value = "30", env = "TIDE_TIMEOUT_SECS")]
    pub tide_timeout_secs: u64,
}

/// Where the scene list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSourceConfig {
    Http { host: String },
    File { path: PathBuf },
}

/// Validated service configuration.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub listen_addr: SocketAddr,
    pub catalog_source: CatalogSourceConfig,
    pub refresh_interval: Duration,
    pub warmup_timeout: Duration,
    pub fetch_timeout: Duration,
    pub tide_url: String,
    pub tide_timeout: Duration,
}

impl BrokerConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let listen_addr: SocketAddr = args
            .listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", args.listen))?;

        if args.refresh_secs == 0 {
            bail!("CATALOG_REFRESH_SECS must be greater than zero");
        }
        if args.fetch_timeout_secs == 0 {
            bail!("CATALOG_FETCH_TIMEOUT_SECS must be greater than zero");
        }

        let catalog_source = match (&args.scene_list_file, &args.landsat_host) {
            (Some(path), _) => CatalogSourceConfig::File { path: path.clone() },
            (None, host) => {
                let host = host
                    .as_deref()
                    .map(str::trim)
                    .filter(|h| !h.is_empty())
                    .unwrap_or(DEFAULT_LANDSAT_HOST);
                require_http_url("LANDSAT_HOST", host)?;
                CatalogSourceConfig::Http {
                    host: host.to_string(),
                }
            }
        };

        let tide_url = args
            .tide_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_TIDE_URL)
            .to_string();
        require_http_url("BF_TIDE_PREDICTION_URL", &tide_url)?;

        Ok(Self {
            listen_addr,
            catalog_source,
            refresh_interval: Duration::from_secs(args.refresh_secs),
            warmup_timeout: Duration::from_secs(args.warmup_timeout_secs),
            fetch_timeout: Duration::from_secs(args.fetch_timeout_secs),
            tide_url,
            tide_timeout: Duration::from_secs(args.tide_timeout_secs),
        })
    }
}

fn require_http_url(name: &str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        bail!("{} must be an http(s) URL, got {:?}", name, value)
    }
}
