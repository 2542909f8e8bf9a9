//! `tuneform` - CLI for recording service orders and exporting receipts.
//!
//! One `new` run walks the whole pipeline: read the latest record, derive the
//! next form number, collect the 13 fields at the prompt, persist, render both
//! receipt copies, export them to a text file, and echo them to the terminal.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use clap::Parser;

use tuneform::cli::{Cli, Command, ConfigCommand, ShowCommand};
use tuneform::export::export;
use tuneform::receipt::render;
use tuneform::sequence::next_form_base;
use tuneform::{init_logging, Collector, Config, Error, FormRecord, Stamp, Storage, Variant};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::New => handle_new(&config),
        Command::Show(cmd) => handle_show(&config, &cmd),
        Command::Status(cmd) => handle_status(&config, cmd.json),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Run one full record cycle: collect, persist, render, export.
fn handle_new(config: &Config) -> anyhow::Result<()> {
    let storage = Storage::open(config.database_path())?;

    let previous = storage.latest()?;
    let form_base = next_form_base(previous.as_ref().map(|r| r.form_base.as_str()));
    let stamp = Stamp::now();

    println!();
    println!(
        "==== {} - Offline Service Order Entry ====",
        config.shop.brand
    );
    println!(
        "Location: {} | Phone: {}",
        config.shop.address, config.shop.phone
    );
    println!("DB: {}", storage.path().display());
    println!();
    println!("Auto Form Base -> {form_base}");
    println!("Auto Date -> {}    Time -> {}", stamp.date_iso, stamp.time);
    println!();

    let started = FormRecord::started(form_base, stamp);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut collector = Collector::new(stdin.lock(), stdout.lock());
    let record = match collector.collect(started, previous.as_ref(), &config.prompts) {
        Ok(record) => record,
        Err(err) if err.is_input_closed() => {
            // Abandon the in-progress record; nothing has been persisted
            println!();
            println!("Aborted. Nothing was saved.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    drop(collector);

    let id = storage.insert(&record)?;

    let client_text = render(&record, Variant::Client, &config.shop);
    let shop_text = render(&record, Variant::Shop, &config.shop);

    println!();
    println!("---- CLIENT COPY ----");
    println!("{client_text}");
    println!();
    println!("---- SHOP COPY ----");
    println!("{shop_text}");
    println!();

    // The record stays persisted even if this write fails; the export can be
    // re-produced from the store with `tuneform show`.
    let path = export(&config.receipt_dir(), id, &client_text, &shop_text)?;
    println!("Saved record id {id} -> {}", path.display());
    println!("New form base will increment next run.");
    Ok(())
}

/// Re-print the receipts for a stored record.
fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let storage = Storage::open(config.database_path())?;
    let record = match cmd.id {
        Some(id) => storage.get(id)?.ok_or(Error::RecordNotFound { id })?,
        None => storage.latest()?.ok_or(Error::NoRecords)?,
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("---- CLIENT COPY ----");
    println!("{}", render(&record, Variant::Client, &config.shop));
    println!();
    println!("---- SHOP COPY ----");
    println!("{}", render(&record, Variant::Shop, &config.shop));
    Ok(())
}

/// Show store status and the next form number.
fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let storage = Storage::open(config.database_path())?;
    let count = storage.count()?;
    let latest = storage.latest()?;
    let next = next_form_base(latest.as_ref().map(|r| r.form_base.as_str()));

    if json {
        let status = serde_json::json!({
            "database_path": storage.path(),
            "records": count,
            "last_form_base": latest.as_ref().map(|r| r.form_base.clone()),
            "next_form_base": next,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("tuneform status");
        println!("---------------");
        println!("Database:       {}", storage.path().display());
        println!("Records:        {count}");
        match &latest {
            Some(record) => println!("Last form base: {}", record.form_base),
            None => println!("Last form base: (none)"),
        }
        println!("Next form base: {next}");
    }
    Ok(())
}

/// View or validate configuration.
fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Shop]");
                println!("  Brand:         {}", config.shop.brand);
                println!("  Address:       {}", config.shop.address);
                println!("  Phone:         {}", config.shop.phone);
                println!();
                println!("[Storage]");
                println!("  Database path: {}", config.database_path().display());
                println!();
                println!("[Export]");
                println!("  Receipt dir:   {}", config.receipt_dir().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
