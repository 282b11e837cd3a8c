use crate::config::Config;
use crate::error::{AppError, Result};
use crate::pipeline::AirQualityService;
use crate::server;
use clap::{Args, Parser, Subcommand};
use colored::*;
use tracing::{error, info};

/// Air quality and respiratory risk lookup
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up current air quality and risk for a city or area
    Lookup(LookupArgs),

    /// Serve the dashboard API (GET /api/aqi?city=...)
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// City or area name
    #[arg(short, long)]
    pub city: String,

    /// Print the raw JSON record instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// CLI application
pub struct App {
    config: Config,
    service: AirQualityService,
}

impl App {
    /// Create a new CLI application from the environment
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;
        let service = AirQualityService::from_config(&config)?;
        Ok(Self::with_service(config, service))
    }

    pub fn with_service(config: Config, service: AirQualityService) -> Self {
        Self { config, service }
    }

    /// Run a single command
    pub async fn run_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Lookup(args) => self.lookup(&args.city, args.json).await,
            Commands::Serve(args) => self.serve(args).await,
        }
    }

    /// Resolve and print the report for one location
    pub async fn lookup(&self, city: &str, json: bool) -> Result<()> {
        let spinner = super::lookup_spinner(city.trim())?;
        let result = self.service.resolve(city).await;
        spinner.finish_and_clear();

        let report = match result {
            Ok(report) => report,
            Err(e) => {
                error!("Lookup for '{}' failed: {:?}", city, e);
                println!(
                    "{} {}",
                    e.class().public_message().red().bold(),
                    format!("({})", e).dimmed()
                );
                return Err(e);
            },
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", super::report_table(&report));
        }
        info!("Lookup for '{}' served by {}", report.query, report.reading.source);
        Ok(())
    }

    async fn serve(&self, args: ServeArgs) -> Result<()> {
        let mut config = self.config.clone();
        if let Some(host) = args.host {
            config.host = host;
        }
        if let Some(port) = args.port {
            config.port = port;
        }
        if config.host.trim().is_empty() {
            return Err(AppError::Cli("host must not be empty".to_string()));
        }

        println!(
            "{} http://{}:{}/api/aqi?city=<name>  (Ctrl+C to stop)",
            "Serving".green().bold(),
            config.host,
            config.port
        );
        server::start(&config).await
    }
}
