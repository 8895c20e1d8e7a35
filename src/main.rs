use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use shelfx::prelude::*;

/// Catalog search engine demo over the in-memory reference index
#[derive(Parser, Debug)]
#[command(name = "shelfx")]
#[command(about = "Catalog vectorization and search demo", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed the sample catalog and search it
    Search {
        /// Free-text query; blank lists everything with score 1.0
        query: String,
    },
    /// Seed the sample catalog and list every record
    List,
    /// Vectorize one record and print its dense/sparse vectors
    Vectorize {
        #[arg(long, default_value_t = 0)]
        id: u64,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
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

    match args.command {
        Command::Search { query } => {
            let service = CatalogService::new(InMemoryIndex::new());
            let seeded = service.init_sample_data()?;
            info!(seeded, "sample catalog ready");
            let results = service.search(&query)?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::List => {
            let service = CatalogService::new(InMemoryIndex::new());
            service.init_sample_data()?;
            let records = service.list_all()?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Vectorize {
            id,
            title,
            description,
            author,
            category,
            theme,
            format,
        } => {
            let record = CatalogRecord {
                id,
                title,
                description,
                author,
                category,
                theme,
                format,
            };
            record.validate()?;

            let vectorizer = Vectorizer::standard();
            let (dense, sparse) = vectorizer.vectorize(&record);
            let output = serde_json::json!({
                "id": record.id,
                "dense": dense.as_slice(),
                "sparse_indices": sparse.indices(),
                "sparse_values": sparse.values(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
