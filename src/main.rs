//! Atlas - A beautiful terminal country browser
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use tokio::runtime::Runtime;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use atlas::{Config, FilterCriteria, RestCountriesClient, available_timezones, compute_sections};

// Plain sync main: the TUI owns its own runtime internally and drives it
// with blocking sends, so it must start outside any runtime context. Only
// the one-shot CLI commands get a runtime here.
fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    match parse_args()? {
        Command::Run => run_tui(),
        Command::Demo => run_demo(),
        Command::List {
            search,
            continents,
            timezones,
        } => Runtime::new()?.block_on(list_cli(search.as_deref(), continents, timezones)),
        Command::Show { name } => Runtime::new()?.block_on(show_cli(&name)),
        Command::Timezones => Runtime::new()?.block_on(timezones_cli()),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    Run,
    Demo,
    List {
        search: Option<String>,
        continents: Vec<String>,
        timezones: Vec<String>,
    },
    Show {
        name: String,
    },
    Timezones,
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Run);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "--demo" | "demo" => Ok(Command::Demo),

        "list" | "ls" => {
            let mut search = None;
            let mut continents = Vec::new();
            let mut timezones = Vec::new();

            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--search" | "-s" => {
                        search = args.get(i + 1).cloned();
                        i += 2;
                    }
                    "--continent" | "-c" => {
                        if let Some(c) = args.get(i + 1) {
                            continents.push(c.clone());
                        }
                        i += 2;
                    }
                    "--timezone" | "-t" => {
                        if let Some(t) = args.get(i + 1) {
                            timezones.push(t.clone());
                        }
                        i += 2;
                    }
                    other => {
                        return Err(anyhow::anyhow!(
                            "Unknown option: {other}\nRun 'atlas --help' for usage"
                        ));
                    }
                }
            }

            Ok(Command::List {
                search,
                continents,
                timezones,
            })
        }

        "show" => {
            let name = args
                .get(2..)
                .filter(|rest| !rest.is_empty())
                .map(|rest| rest.join(" "))
                .ok_or_else(|| anyhow::anyhow!("Missing country name\nExample: atlas show Peru"))?;
            Ok(Command::Show { name })
        }

        "timezones" | "tz" => Ok(Command::Timezones),

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'atlas --help' for usage"
        )),
    }
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"{}
🌍 Atlas - A beautiful terminal country browser

USAGE:
    atlas                              Launch TUI
    atlas [COMMAND]

COMMANDS:
    list [OPTIONS]                     Print the country list
      Options:
        -s, --search <query>           Filter by name (case-insensitive)
        -c, --continent <name>         Filter by continent (repeatable)
        -t, --timezone <tz>            Filter by timezone (repeatable)
      Examples:
        atlas list --search peru
        atlas list -c Europe -c Asia
        atlas list -c Americas -t UTC-05:00

    show <name>                        Show details for one country
      Examples:
        atlas show Peru
        atlas show "South Africa"

    timezones                          List all known timezones

    demo                               Launch TUI with bundled data (offline)

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

KEYBINDINGS (TUI):
    Navigation
      j/↓           Move down
      k/↑           Move up
      g/G           Jump to top/bottom
      Enter         Open country details
      Esc           Back / clear search

    Actions
      /             Search by name
      f             Continent & timezone filters
      o             Open country on Google Maps
      r             Refresh / retry

    View
      Tab           Flag / coat of arms (detail view)
      t             Change theme
      ?             Help

CONFIG:
    {}

HOMEPAGE:
    https://github.com/atlas-tui/atlas
"#,
        atlas::LOGO,
        config_path
    );
}

fn print_version() {
    println!("atlas {}", atlas::VERSION);
}

fn run_tui() -> Result<()> {
    atlas::app::run()
}

fn run_demo() -> Result<()> {
    atlas::app::run_demo()
}

fn client_from_config() -> Result<RestCountriesClient> {
    let config = Config::load()?;
    Ok(RestCountriesClient::new(&config.api_base_url))
}

async fn list_cli(
    search: Option<&str>,
    continents: Vec<String>,
    timezones: Vec<String>,
) -> Result<()> {
    let client = client_from_config()?;
    let countries = client.all().await?;

    let criteria = FilterCriteria {
        name_query: search.unwrap_or_default().to_string(),
        continents,
        timezones,
    };
    let sections = compute_sections(&countries, &criteria);

    if sections.is_empty() {
        println!("No countries match.");
        return Ok(());
    }

    let total: usize = sections.iter().map(|s| s.items.len()).sum();

    for section in &sections {
        println!("\n{}", section.title);
        println!("{}", "─".repeat(40));
        for country in &section.items {
            let capital = country.primary_capital().unwrap_or("-");
            println!("  {:<32} {}", country.name.common, capital);
        }
    }

    println!("\n{total} countries");
    Ok(())
}

async fn show_cli(name: &str) -> Result<()> {
    let client = client_from_config()?;
    let country = client.by_name(name).await?;

    println!("\n{}", country.name.common);
    println!("{}", country.name.official);
    println!("{}", "─".repeat(40));

    let mut row = |label: &str, value: Option<String>| {
        if let Some(value) = value {
            println!("{label:<18} {value}");
        }
    };

    row("Population", Some(country.population_display()));
    row(
        "Region",
        (!country.region.is_empty()).then(|| country.region.clone()),
    );
    row("Subregion", country.subregion.clone());
    row("Capital", country.primary_capital().map(String::from));
    row("Languages", country.languages_display());
    row("Area", Some(country.area_display()));
    row("Currency", country.currency_display());
    row("Time zone", country.primary_timezone().map(String::from));
    row("Local time", country.local_time());
    row("Calling code", country.calling_code());
    row(
        "Borders",
        (!country.borders.is_empty()).then(|| country.borders.join(", ")),
    );
    row(
        "Continents",
        (!country.continents.is_empty()).then(|| country.continents.join(", ")),
    );
    if let Some(url) = country.map_url() {
        row("Map", Some(url.to_string()));
    }

    Ok(())
}

async fn timezones_cli() -> Result<()> {
    let client = client_from_config()?;
    let countries = client.all().await?;

    for timezone in available_timezones(&countries) {
        println!("{timezone}");
    }

    Ok(())
}
