use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use terra::api::{CountrySource, FetchMode, RestCountriesClient, fetch};
use terra::core::action::{Action, Effect, update};
use terra::core::config::{self, ResolvedConfig};
use terra::core::country::{Country, normalize};
use terra::core::state::App;

#[derive(Parser)]
#[command(name = "terra", about = "Look up country facts from restcountries.com")]
struct Args {
    /// Country data API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Print countries matching NAME and exit
    #[arg(short, long, value_name = "NAME", conflicts_with = "random")]
    search: Option<String>,

    /// Print one random country and exit
    #[arg(short, long)]
    random: bool,

    /// Log file path
    #[arg(long, default_value = "terra.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::TerraConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());
    log::info!("Terra starting up against {}", resolved.base_url);

    let source: Arc<dyn CountrySource> =
        Arc::new(RestCountriesClient::new(Some(resolved.base_url.clone())));

    let mut app = App::from_config(&resolved);
    match one_shot_effect(&mut app, args.search, args.random) {
        None => terra::tui::run(resolved, source).map(|()| ExitCode::SUCCESS),
        Some(Effect::Fetch(mode)) => Ok(print_once(&resolved, source.as_ref(), &mode).await),
        Some(_) => {
            log::warn!("Blank search text, nothing requested");
            eprintln!("No results");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run `--search`/`--random` through the reducer so the CLI shares its
/// blank-query guard. `None` means no one-shot flag was given.
fn one_shot_effect(app: &mut App, search: Option<String>, random: bool) -> Option<Effect> {
    let action = match (search, random) {
        (Some(name), _) => {
            update(app, Action::SearchTextChanged(name));
            Action::Search
        }
        (None, true) => Action::RandomCountry,
        (None, false) => return None,
    };
    Some(update(app, action))
}

/// Fetch once and print the normalized records to stdout.
async fn print_once(config: &ResolvedConfig, source: &dyn CountrySource, mode: &FetchMode) -> ExitCode {
    let countries = match fetch(source, mode).await {
        Ok(raw) => normalize(&raw, &config.format).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match countries {
        Ok(countries) => {
            for country in &countries {
                print_country(country);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Error fetching data: {}", e);
            eprintln!("No results ({e})");
            ExitCode::FAILURE
        }
    }
}

fn print_country(country: &Country) {
    println!("{} [{}]", country.name, country.id);
    println!("  Continents: {}", country.continents);
    println!("  Capital:    {}", country.capital);
    println!("  Currency:   {}", country.currency);
    println!("  Language:   {}", country.language);
    println!("  Population: {}", country.population);
    println!("  Flag:       {}", country.flag);
    println!("  Map:        {}", country.location);
}
