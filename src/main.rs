use anyhow::Result;
use chrono::Utc;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use signal_analyzer::config::Config;
use signal_analyzer::core::{parse_amount, EvaluationError, SignalEvaluator};
use signal_analyzer::provider::{
    AnalysisProvider, AnalyzeRequest, HttpAnalysisProvider, ReplayProvider,
};
use signal_analyzer::report::{self, StampedEvaluation};

const USAGE: &str = "usage: signal-analyzer <SYMBOL> <AMOUNT> [--json]";

struct CliArgs {
    request: AnalyzeRequest,
    json: bool,
}

impl CliArgs {
    /// Symbol and a numeric amount are both required.
    fn parse(args: &[String]) -> Option<Self> {
        let json = args.iter().any(|a| a == "--json");
        let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

        let symbol = positional.first()?;
        let amount = positional.get(1).and_then(|s| parse_amount(s))?;

        Some(Self {
            request: AnalyzeRequest::new(symbol, amount),
            json,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(cli) = CliArgs::parse(&args) else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };
    let amount = cli.request.amount;

    let provider: Box<dyn AnalysisProvider> = match &cfg.replay_file {
        Some(path) => Box::new(ReplayProvider::from_json_file(path)?),
        None => Box::new(HttpAnalysisProvider::new(&cfg)?),
    };

    let result = match provider.analyze(&cli.request).await {
        Ok(r) => r,
        Err(e) => {
            error!("Analysis request failed: {:#}", e);
            eprintln!("Something went wrong. Please check your inputs.");
            std::process::exit(1);
        }
    };

    let evaluator = SignalEvaluator::new(&cfg);
    let evaluated_at = Utc::now();
    match evaluator.evaluate(&result, Some(amount)) {
        Ok(eval) if cli.json => {
            let stamped = StampedEvaluation {
                evaluated_at,
                evaluation: &eval,
            };
            println!("{}", serde_json::to_string_pretty(&stamped)?);
        }
        Ok(eval) => report::print_summary(&eval, evaluated_at),
        Err(EvaluationError::Upstream(msg)) => {
            eprintln!("Error: {}", msg);
            std::process::exit(1);
        }
    }

    Ok(())
}
