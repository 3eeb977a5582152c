use clap::Parser;
use miette::{IntoDiagnostic, Result};
use mortgage_engine::application::engine::MortgageEngine;
use mortgage_engine::application::rates::RateQueryService;
use mortgage_engine::domain::feasibility::FeasibilityValidator;
use mortgage_engine::domain::ports::RateCatalogRef;
use mortgage_engine::domain::rate::RateRecord;
use mortgage_engine::infrastructure::cache::CachedRateCatalog;
use mortgage_engine::infrastructure::in_memory::InMemoryRateCatalog;
#[cfg(feature = "storage-rocksdb")]
use mortgage_engine::infrastructure::rocksdb::RocksDbRateCatalog;
use mortgage_engine::interfaces::csv::rate_reader::RateReader;
use mortgage_engine::interfaces::http::{AppState, router};
use rust_decimal::Decimal;
use std::fs::File;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Interest rates CSV file used to seed the catalog
    rates_file: PathBuf,

    /// Address to serve the HTTP API on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Cache rate catalog reads for this many seconds
    #[arg(long)]
    cache_ttl_secs: Option<u64>,

    /// Maximum loan as a multiple of yearly income
    #[arg(long, default_value = "4.5")]
    max_loan_multiplier: Decimal,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Seed the catalog before accepting traffic; a malformed row aborts startup.
    let file = File::open(&cli.rates_file).into_diagnostic()?;
    let mut records = Vec::new();
    for row in RateReader::new(file).rates() {
        records.push(row.into_diagnostic()?);
    }
    info!(
        rates = records.len(),
        source = %cli.rates_file.display(),
        "loaded interest rates"
    );

    let mut catalog = build_catalog(cli.db_path, records).await?;
    if let Some(secs) = cli.cache_ttl_secs {
        catalog = Arc::new(CachedRateCatalog::new(catalog, Duration::from_secs(secs)));
    }

    let engine = MortgageEngine::new(Arc::clone(&catalog))
        .with_validator(FeasibilityValidator::new(cli.max_loan_multiplier));
    let rates = RateQueryService::new(catalog);
    let app = router(AppState::new(engine, rates));

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .into_diagnostic()?;
    info!(addr = %cli.bind, "mortgage service listening");
    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}

async fn build_catalog(
    db_path: Option<PathBuf>,
    records: Vec<RateRecord>,
) -> Result<RateCatalogRef> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = db_path {
        // Use persistent storage (RocksDB)
        let store = RocksDbRateCatalog::open(db_path).into_diagnostic()?;
        for record in records {
            store.upsert(record).await.into_diagnostic()?;
        }
        return Ok(Arc::new(store));
    }

    #[cfg(not(feature = "storage-rocksdb"))]
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }

    // Use in-memory storage
    let catalog = InMemoryRateCatalog::new();
    for record in records {
        catalog.upsert(record).await;
    }
    Ok(Arc::new(catalog))
}
