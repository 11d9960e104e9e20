use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::error;

use smart_trip_planner::{
    Dispatcher, FormController, FormState, SearchCriteria, SearchForm, TripPlannerConfig,
    llm::client_from_config,
    logging,
    models::{ItineraryRequest, VisaCheckRequest},
    presentation::{ListedDestination, group_by_visa, html::format_usd, links, partition_suggestions},
    web,
};

#[derive(Parser)]
#[command(name = "smart-trip-planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask for destination suggestions once and print them
    Suggest {
        /// First travel day (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Last travel day (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        #[arg(short, long)]
        nationality: String,

        /// Budget in USD
        #[arg(short, long, default_value = "1000")]
        budget: String,

        #[arg(short, long, default_value = "1")]
        travelers: String,
    },

    /// Generate a day-by-day itinerary for one destination
    Itinerary {
        destination: String,

        /// e.g. "2025-06-01 to 2025-06-07"
        #[arg(long)]
        dates: String,

        #[arg(short, long)]
        interests: Option<String>,
    },

    /// Check visa requirements for a nationality and destination
    Visa {
        #[arg(short, long)]
        nationality: String,

        destination: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = TripPlannerConfig::load_from_path(cli.config)?;
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(config).await
        }
        Commands::Suggest {
            from,
            to,
            nationality,
            budget,
            travelers,
        } => {
            let form = SearchForm {
                start_date: from,
                end_date: to,
                nationality,
                budget,
                number_of_travelers: travelers,
            };
            suggest(&config, &form).await
        }
        Commands::Itinerary {
            destination,
            dates,
            interests,
        } => {
            let dispatcher = dispatcher(&config)?;
            let response = dispatcher
                .generate_itinerary(&ItineraryRequest {
                    destination,
                    travel_dates: dates,
                    interests,
                })
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            println!("{}", response.itinerary);
            Ok(())
        }
        Commands::Visa {
            nationality,
            destination,
        } => {
            let dispatcher = dispatcher(&config)?;
            let response = dispatcher
                .check_visa_requirements(&VisaCheckRequest {
                    nationality,
                    destination,
                })
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            let verdict = if response.visa_required {
                "Visa required"
            } else {
                "Visa not required"
            };
            println!("{verdict}\n\n{}", response.visa_details);
            Ok(())
        }
    }
}

fn dispatcher(config: &TripPlannerConfig) -> Result<Dispatcher> {
    let client = client_from_config(config).context("Failed to create model client")?;
    Ok(Dispatcher::new(client))
}

async fn suggest(config: &TripPlannerConfig, form: &SearchForm) -> Result<()> {
    let mut controller = FormController::new();
    let criteria = match controller.submit(form) {
        FormState::Valid(criteria) => criteria.clone(),
        FormState::Invalid(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            bail!("Invalid search criteria");
        }
        FormState::Idle | FormState::Validating => bail!("Search form was not validated"),
    };

    let result = dispatcher(config)?
        .suggest_destinations(&criteria)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if let Some(disclaimer) = &result.disclaimer {
        println!("Please note: {disclaimer}\n");
    }
    let listing = partition_suggestions(&result.destinations);
    if listing.is_empty() {
        println!("No destinations matched your criteria. Please try different options.");
        return Ok(());
    }

    print_group("Top suggestions", &listing.primary, &criteria);
    print_group("Premium options", &listing.premium, &criteria);
    Ok(())
}

fn print_group(title: &str, entries: &[ListedDestination<'_>], criteria: &SearchCriteria) {
    if entries.is_empty() {
        return;
    }
    println!("{title}");
    for (class, group) in group_by_visa(entries) {
        println!(" {}", class.label());
        for entry in group {
            let d = entry.destination;
            println!(
                "  {:<24} flight {:>8}  expenses {:>8}  total {:>8}",
                d.country,
                format_usd(d.average_flight_price),
                format_usd(d.estimated_expenses),
                format_usd(d.trip_cost())
            );
            println!("    visa: {}", d.visa_requirements);
            println!(
                "    flights: {}",
                links::flight_search_url(
                    &d.country,
                    Some(&criteria.travel_dates),
                    Some(criteria.number_of_travelers)
                )
            );
        }
    }
    println!();
}
