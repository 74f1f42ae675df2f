use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use zoo_visitors::api::DEFAULT_API_URL;
use zoo_visitors::report::{RenderOptions, render_report};
use zoo_visitors::storage::DEFAULT_DATA_PATH;
use zoo_visitors::{Client, analyze, storage};

#[derive(Parser, Debug)]
#[command(
    name = "zoo-visitors",
    version,
    about = "Fetch, store & summarize a year of daily zoo visitor counts"
)]
struct Cli {
    /// Endpoint returning the yearly visitor payload.
    #[arg(long, default_value = DEFAULT_API_URL)]
    url: String,
    /// Where the fetched payload is saved (pretty JSON).
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data_path: PathBuf,
    /// Analyze a previously saved snapshot instead of fetching.
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,
    /// Print the full report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Locale for number formatting in the text report (e.g., en, de).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Include month/year total consistency checks in the text report.
    #[arg(long, default_value_t = false)]
    check_consistency: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let payload = match &cli.input {
        Some(path) => storage::load_json(path)
            .with_context(|| format!("loading snapshot {}", path.display()))?,
        None => {
            let payload = Client::new(cli.url.as_str())
                .fetch_raw()
                .with_context(|| format!("GET {}", cli.url))?;
            zoo_visitors::validate::validate(&payload)?;
            storage::save_json(&payload, &cli.data_path)?;
            eprintln!("Saved raw data to {}", cli.data_path.display());
            payload
        }
    };

    let report = analyze(&payload)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let opts = RenderOptions {
            locale: cli.locale,
            show_consistency: cli.check_consistency,
        };
        print!("{}", render_report(&report, &opts));
    }
    Ok(())
}
