//! Command-line frontend for the stock advisor
//!
//! Collects the ticker symbol and provider credentials from flags,
//! environment variables, or interactive prompts, then runs one analysis
//! and prints the verdict. The advisory disclaimer is shown on every run.

use std::io::{self, BufRead, Write};

use advisor_stock::shell::DISCLAIMER;
use advisor_stock::{AdvisorConfig, AnalysisSession, ShellState, StockAdvisor};
use anyhow::Context;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "advisor", about = "LLM-backed stock analysis", version)]
struct Args {
    /// Stock ticker symbol to analyze (e.g. TSLA)
    #[arg(short, long)]
    ticker: Option<String>,

    /// Alpha Vantage API key [env: ALPHA_VANTAGE_API_KEY]
    #[arg(long, env = "ALPHA_VANTAGE_API_KEY", hide_env_values = true)]
    alpha_vantage_key: Option<String>,

    /// OpenAI API key [env: OPENAI_API_KEY]
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_key: Option<String>,

    /// Model identifier
    #[arg(long, default_value = "gpt-3.5-turbo")]
    model: String,

    /// Language for the verdict (tag like "en"/"ko", or a full name)
    #[arg(long, default_value = "en")]
    language: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    advisor_utils::init_tracing();
    let args = Args::parse();

    println!("{DISCLAIMER}");
    println!();

    let mut session = AnalysisSession::new();
    session.set_ticker(resolve_input(args.ticker, "Ticker symbol (e.g. TSLA): ")?);
    session.set_data_provider_key(resolve_input(
        args.alpha_vantage_key,
        "Alpha Vantage API key: ",
    )?);
    session.set_model_provider_key(resolve_input(args.openai_key, "OpenAI API key: ")?);

    if let Err(missing) = session.begin_run() {
        for field in &missing {
            eprintln!("error: missing {}", field.label());
        }
        anyhow::bail!("cannot run analysis without all inputs");
    }
    debug!(state = ?session.state(), "Session validated, starting run");

    let inputs = session.inputs().clone();
    let config = AdvisorConfig::builder()
        .openai_api_key(inputs.model_provider_key)
        .alpha_vantage_api_key(inputs.data_provider_key)
        .model(&args.model)
        .language(&args.language)
        .build()
        .context("invalid configuration")?;

    let advisor = match StockAdvisor::new(config) {
        Ok(advisor) => advisor,
        Err(e) => {
            session.fail();
            return Err(anyhow::Error::from(e).context("failed to set up the model provider"));
        }
    };

    println!("Analyzing {}...", inputs.ticker);
    println!();

    match advisor.analyze(&inputs.ticker).await {
        Ok(verdict) => {
            session.complete(verdict);
        }
        Err(e) => {
            session.fail();
            return Err(anyhow::Error::from(e).context("analysis failed"));
        }
    }

    debug_assert_eq!(session.state(), ShellState::ShowingResult);
    if let Some(verdict) = session.result() {
        println!("Analysis Result");
        println!("===============");
        println!("{verdict}");
        println!();
        println!("{DISCLAIMER}");
    }

    Ok(())
}

/// Use the flag value if given, otherwise prompt on stdin
fn resolve_input(flag: Option<String>, prompt: &str) -> anyhow::Result<String> {
    if let Some(value) = flag {
        return Ok(value);
    }

    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}
