mod api;
mod cli;
mod config;
mod error;
mod models;
mod pipeline;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{App, Cli, Commands, LookupArgs, ServeArgs};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Logs to stderr, or to a daily-rolling file under `LOG_DIR` when set.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match std::env::var("LOG_DIR") {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "airwatch.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        },
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            None
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = init_logging();
    let cli = Cli::parse();

    info!("Initializing air quality lookup...");

    let app = match App::new() {
        Ok(app) => {
            info!("Application initialized successfully.");
            app
        },
        Err(e) => {
            error!("Failed to initialize application: {:?}", e);
            println!(
                "{}",
                "Error: Failed to initialize application. Check API keys and logs.".red()
            );
            return Err(e).context("failed to initialize application");
        },
    };

    if let Some(command) = cli.command {
        app.run_command(command).await?;
        return Ok(());
    }

    println!(
        "{}",
        "Welcome to the Air Quality & Respiratory Risk CLI!".cyan().bold()
    );

    // Main interactive loop
    loop {
        let options = &[
            "Look up air quality for a city",
            "Start the dashboard API server",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(options)
            .default(0)
            .interact_opt()? // Ctrl+C / Esc yields None
            .unwrap_or(options.len() - 1);

        println!("\n---\n");

        let command_result = match selection {
            0 => match cli::prompt_city() {
                Ok(city) => {
                    app.run_command(Commands::Lookup(LookupArgs { city, json: false }))
                        .await
                },
                Err(e) => {
                    println!("{} {}", "Failed to get city:".red(), e);
                    continue;
                },
            },
            1 => app.run_command(Commands::Serve(ServeArgs::default())).await,
            _ => {
                println!("{}", "Exiting application. Goodbye!".green());
                break;
            },
        };

        // Lookup failures were already reported to the user
        if let Err(e) = command_result {
            error!("Command execution failed: {:?}", e);
        }

        println!("\n---\n");
    }

    Ok(())
}
