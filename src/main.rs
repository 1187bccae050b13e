use category_totals::application::engine::{Strategy, TotalsEngine};
use category_totals::application::partition::PartitionPolicy;
use category_totals::domain::transaction::Transaction;
use category_totals::infrastructure::generator::make_transactions;
use category_totals::interfaces::csv::totals_writer::TotalsWriter;
use category_totals::interfaces::csv::transaction_reader::TransactionReader;
use category_totals::interfaces::{json, xml};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    Csv,
    Json,
    Xml,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    Xml,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Sequential,
    Locked,
    Direct,
    Channel,
    /// Run every parallel strategy and fail unless all agree with the sequential totals
    All,
}

impl StrategyArg {
    fn strategy(self) -> Option<Strategy> {
        match self {
            StrategyArg::Sequential => Some(Strategy::Sequential),
            StrategyArg::Locked => Some(Strategy::Locked),
            StrategyArg::Direct => Some(Strategy::Direct),
            StrategyArg::Channel => Some(Strategy::Channel),
            StrategyArg::All => None,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input transactions file (CSV, JSON or XML)
    #[arg(required_unless_present = "generate")]
    input: Option<PathBuf>,

    /// Input format. Inferred from the file extension when omitted.
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Aggregate this many synthetic grocery/restaurant pairs instead of reading a file
    #[arg(long, conflicts_with = "input")]
    generate: Option<usize>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Channel)]
    strategy: StrategyArg,

    /// Number of worker tasks
    #[arg(short, long, default_value_t = 4, allow_negative_numbers = true)]
    workers: i64,

    /// How records left over by an uneven split are handled
    #[arg(long, value_enum, default_value_t = PartitionPolicy::Truncate)]
    partition: PartitionPolicy,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    output: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let records: Vec<Transaction> = match &cli.input {
        Some(path) => load_transactions(path, cli.format)?,
        None => make_transactions(cli.generate.unwrap_or_default()).into_diagnostic()?,
    };
    info!("aggregating {} transactions with {} workers", records.len(), cli.workers);

    let engine = TotalsEngine::new(cli.partition);
    let records: Arc<[Transaction]> = records.into();
    let totals = match cli.strategy.strategy() {
        Some(strategy) => engine.aggregate(strategy, Some(records), cli.workers).await,
        None => engine.cross_check(Some(records), cli.workers).await,
    }
    .into_diagnostic()?;

    let stdout = io::stdout();
    match cli.output {
        OutputFormat::Csv => TotalsWriter::new(stdout.lock())
            .write_totals(&totals)
            .into_diagnostic()?,
        OutputFormat::Json => json::write_totals(stdout.lock(), &totals).into_diagnostic()?,
        OutputFormat::Xml => xml::write_totals(stdout.lock(), &totals).into_diagnostic()?,
    }

    Ok(())
}

fn load_transactions(path: &Path, format: Option<InputFormat>) -> Result<Vec<Transaction>> {
    let format = format.unwrap_or_else(|| match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
        Some(ext) if ext.eq_ignore_ascii_case("xml") => InputFormat::Xml,
        _ => InputFormat::Csv,
    });
    let file = File::open(path).into_diagnostic()?;

    match format {
        InputFormat::Json => json::read_transactions(BufReader::new(file)).into_diagnostic(),
        InputFormat::Xml => xml::read_transactions(BufReader::new(file)).into_diagnostic(),
        InputFormat::Csv => {
            let mut records = Vec::new();
            for tx_result in TransactionReader::new(file).transactions() {
                match tx_result {
                    Ok(tx) => records.push(tx),
                    Err(e) => warn!("Skipping unreadable transaction: {}", e),
                }
            }
            Ok(records)
        }
    }
}
