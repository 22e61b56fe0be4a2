use anyhow::Context;
use clap::Parser;
use creditmem_core::{ApplicationRecord, SimilarityEngine, DEFAULT_TOP_K};
use creditmem_index::{IndexConfig, QdrantIndex};
use creditmem_report::ReportGenerator;
use creditmem_transform::FittedTransformer;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Similarity-based decision support for loan applications
#[derive(Parser, Debug)]
#[command(name = "creditmem")]
#[command(about = "Retrieve similar historical loan cases and render a decision report", long_about = None)]
struct Args {
    /// Path to the application record (JSON)
    #[arg(short, long)]
    application: PathBuf,

    /// Path to the fitted transformer artifact (JSON)
    #[arg(long, default_value = "vector_preprocessor.json")]
    artifact: PathBuf,

    /// Path for the rendered decision report
    #[arg(short, long, default_value = "decision_report.md")]
    output: PathBuf,

    /// Optional pre-generated outcome chart image
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Historical case collection to query
    #[arg(long, default_value = "credit_decision_memory")]
    collection: String,

    /// Maximum number of similar cases to retrieve
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Vector index endpoint
    #[arg(long, env = "QDRANT_URL")]
    url: String,

    /// Vector index API key
    #[arg(long, env = "QDRANT_API_KEY")]
    api_key: Option<String>,

    /// Index request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting creditmem v{}", env!("CARGO_PKG_VERSION"));

    let raw = std::fs::read_to_string(&args.application)
        .with_context(|| format!("reading application record {:?}", args.application))?;
    let record: ApplicationRecord =
        serde_json::from_str(&raw).context("parsing application record")?;

    let transformer = FittedTransformer::load(&args.artifact)
        .with_context(|| format!("loading transformer artifact {:?}", args.artifact))?;
    info!("Transformer loaded ({} components)", transformer.vector_dim());

    let mut config = IndexConfig::new(&args.url)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(key) = &args.api_key {
        config = config.with_api_key(key);
    }
    let index = QdrantIndex::new(config)?;

    let engine = SimilarityEngine::new(transformer, index, args.collection);
    let summary = engine.find_similar(&record, args.top_k).await?;

    info!(
        "Retrieved {} similar cases (avg similarity {:.3})",
        summary.total_cases, summary.avg_similarity
    );

    ReportGenerator::new().generate(
        &args.output,
        &record,
        &summary,
        args.chart.as_deref(),
    )?;

    info!("Report written to {:?}", args.output);
    Ok(())
}
