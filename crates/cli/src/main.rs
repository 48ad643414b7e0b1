//! nlq: natural-language FHIR query converter binary entrypoint.

mod config;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use nlq_core::QueryProcessor;

/// Convert natural-language clinical queries into FHIR Patient searches
#[derive(Debug, Parser)]
#[command(name = "nlq", version, about)]
struct Cli {
    /// Run the built-in demonstration queries and exit
    #[arg(long)]
    demo: bool,
}

/// Canonical demonstration queries.
const DEMO_QUERIES: &[&str] = &[
    "Show me all diabetic patients over 50",
    "please give me information on youth patients who have cancer",
    "List all children with asthma",
    "Find elderly patients with heart disease",
    "Get patients under 30 with depression",
    "Show me cancer patients between 40 and 60 years old",
    "Find adults with high blood pressure",
];

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let processor = build_processor(&config);

    if cli.demo {
        run_demo(&processor);
    } else {
        run_interactive(&processor);
    }
}

/// Build the processor, degrading to plain-text matching when the
/// optional tokenizer model is unavailable.
fn build_processor(config: &Config) -> QueryProcessor {
    #[cfg(feature = "ner")]
    if let Some(path) = &config.model_path {
        match nlq_core::ModelRecognizer::from_file(path) {
            Ok(recognizer) => {
                tracing::info!("Tokenizer model loaded, entity recognition enabled");
                return QueryProcessor::with_recognizer(Box::new(recognizer));
            }
            Err(e) => {
                tracing::warn!("{e}; falling back to plain-text matching");
            }
        }
    }

    #[cfg(not(feature = "ner"))]
    if config.model_path.is_some() {
        tracing::warn!(
            "NLQ_MODEL_PATH is set but the `ner` feature is disabled, using plain-text matching"
        );
    }

    QueryProcessor::new()
}

/// Run the fixed demonstration queries and print each outcome.
fn run_demo(processor: &QueryProcessor) {
    println!("=== FHIR NLP Query Processor Demo ===\n");

    for (i, query) in DEMO_QUERIES.iter().enumerate() {
        println!("Example {}:", i + 1);
        println!("Input: {query}");
        match processor.convert(query) {
            Ok(result) => println!("Output: {result}"),
            Err(e) => println!("Error: {e}"),
        }
        println!("{}", "-".repeat(50));
    }
}

/// Read queries line-by-line from stdin and print results.
fn run_interactive(processor: &QueryProcessor) {
    println!("Enter a query (Ctrl-D to exit):");
    print!("> ");
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };

        match processor.convert(&line) {
            Ok(result) => println!("{result}"),
            Err(e) => eprintln!("Error: {e}"),
        }

        print!("> ");
        let _ = io::stdout().flush();
    }
}
