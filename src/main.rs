use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use fan_scraper::parser::extract::{posts, roster, schedule, summary};
use fan_scraper::sources::ListingKind;
use fan_scraper::{page, Fetcher, Settings};
use tracing::info;

#[derive(Parser)]
#[command(name = "fan_scraper", about = "Scrape fan page sources into embeddable fragments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the whole page context and print it as JSON
    Page,
    /// Print one post listing as table rows
    Posts {
        #[arg(value_enum)]
        listing: Listing,
    },
    /// Print the schedule table rows
    Schedule,
    /// Print the squad roster table rows
    Roster,
    /// Print the team summary as JSON
    Stats,
}

#[derive(Clone, Copy, ValueEnum)]
enum Listing {
    Soccer,
    SoccerTop,
    Team,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    let fetcher = Fetcher::new(&settings.user_agent)?;
    let urls = &settings.sources;

    match cli.command {
        Commands::Page => {
            let context = page::build(&fetcher, &settings).await;
            println!("{}", serde_json::to_string_pretty(&context)?);
        }
        Commands::Posts { listing } => {
            let (url, kind) = match listing {
                Listing::Soccer => (&urls.soccer, ListingKind::Listing),
                Listing::SoccerTop => (&urls.soccer_top, ListingKind::Search),
                Listing::Team => (&urls.team, ListingKind::Listing),
            };
            print!("{}", posts::scrape(&fetcher, url, kind).await?);
        }
        Commands::Schedule => {
            print!("{}", schedule::scrape(&fetcher, &urls.schedule).await?);
        }
        Commands::Roster => {
            print!("{}", roster::scrape(&fetcher, &urls.squad).await?);
        }
        Commands::Stats => {
            let stats = summary::scrape(&fetcher, &urls.squad).await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    info!("done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
