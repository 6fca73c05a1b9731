use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

use toolcat::domain::{SubmissionStatus, ToolForm};
use toolcat::intent::classify;
use toolcat::storage::FileBackend;
use toolcat::store::ToolSubmissionStore;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolcat")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolcat.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn open_store(config: &Config) -> Result<ToolSubmissionStore<FileBackend>> {
    let backend = FileBackend::new(&config.storage.catalog_path).context(format!(
        "Failed to open catalog at {}",
        config.storage.catalog_path.display()
    ))?;
    Ok(ToolSubmissionStore::new(backend))
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Submit {
            name,
            category,
            pricing,
            price,
            currency,
            description,
            features,
            tags,
            compatibility,
            website,
            logo,
            submitter,
        } => {
            let form = ToolForm {
                name: name.clone(),
                category: category.clone(),
                pricing_type: pricing.clone(),
                price: *price,
                currency: currency.clone(),
                description: description.clone(),
                features: features.clone(),
                tags: tags.clone(),
                compatibility: compatibility.clone(),
                website: website.clone(),
                logo: logo.clone(),
                submitter_name: submitter.clone(),
            };
            handle_submit_command(form, config)
        }
        Commands::List { status } => handle_list_command(status.as_deref(), config),
        Commands::Approve { id } => handle_approve_command(id, config),
        Commands::Catalog { query } => handle_catalog_command(query.as_deref(), config),
        Commands::Classify { message } => handle_classify_command(message),
    }
}

fn handle_submit_command(form: ToolForm, config: &Config) -> Result<()> {
    info!("Submitting tool: {}", form.name);
    let mut store = open_store(config)?;
    let id = store.submit(form).context("Failed to persist submission")?;
    println!("{} {}", "Submitted:".green(), id);
    println!("  Awaiting moderation (status: pending)");
    Ok(())
}

fn handle_list_command(status: Option<&str>, config: &Config) -> Result<()> {
    info!("Listing submissions - status: {:?}", status);
    let store = open_store(config)?;

    let filter = match status {
        Some(s) => Some(
            s.parse::<SubmissionStatus>()
                .map_err(|e| eyre::eyre!(e))
                .context("Invalid --status value")?,
        ),
        None => None,
    };

    let tools = store.list();
    let mut shown = 0;
    for tool in &tools {
        if let Some(wanted) = filter {
            if tool.status != wanted {
                continue;
            }
        }
        shown += 1;
        let status_label = match tool.status {
            SubmissionStatus::Pending => tool.status.as_str().yellow(),
            SubmissionStatus::Approved => tool.status.as_str().green(),
            SubmissionStatus::Rejected => tool.status.as_str().red(),
        };
        println!(
            "{}  [{}]  {} ({}) by {}",
            tool.id, status_label, tool.name, tool.category, tool.submitted_by
        );
    }

    if shown == 0 {
        println!("{}", "No submissions found".yellow());
    }
    Ok(())
}

fn handle_approve_command(id: &str, config: &Config) -> Result<()> {
    info!("Approving submission: {}", id);
    let mut store = open_store(config)?;

    let known = store.get(id).is_some();
    store.approve(id).context("Failed to persist approval")?;

    if known {
        println!("{} {}", "Approved:".green(), id);
    } else {
        // Unknown ids are a no-op by contract, not a failure
        println!("{} no submission with id {}", "Warning:".yellow(), id);
    }
    Ok(())
}

fn handle_catalog_command(query: Option<&str>, config: &Config) -> Result<()> {
    info!("Showing catalog - query: {:?}", query);
    let store = open_store(config)?;

    let entries = match query {
        Some(q) => store.search_catalog(q),
        None => store.list_approved(),
    };

    if entries.is_empty() {
        println!("{}", "No approved tools in the catalog".yellow());
        return Ok(());
    }

    for entry in &entries {
        println!("{} ({}, {})", entry.name.bold(), entry.category, entry.pricing_type);
        if !entry.description.is_empty() {
            println!("  {}", entry.description);
        }
        if !entry.tags.is_empty() {
            println!("  tags: {}", entry.tags.join(", "));
        }
        println!("  {}", entry.website.blue());
    }
    Ok(())
}

fn handle_classify_command(message: &str) -> Result<()> {
    let intent = classify(message);
    info!("Classified message as: {}", intent.as_str());
    println!("{} {}", "Intent:".cyan(), intent.as_str());
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
