//! "expirybot" - checks TLS certificates of configured domains

//! Crate docs

#![forbid(unsafe_code)]
#![deny(
    missing_docs,
    unstable_features,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    while_true,
    unused_extern_crates
)]
// For development:
// #![allow(dead_code, unused_imports, unused_variables, deprecated)]


use actix::prelude::*;
use clap::Parser;
use expirybot::{actors::reporter::Reporter, api::*, *};
use std::{io, path::PathBuf, process, sync::Arc};
use tracing_subscriber::EnvFilter;


/// Command line options
#[derive(Debug, Parser)]
#[command(version, about = "Reports domains with TLS certificates expiring soon")]
struct Cli {
    /// Path to domains file (overrides default config file)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Add a domain to check (format: domain.com[,threshold])
    #[arg(long, value_name = "DOMAIN[,THRESHOLD]")]
    add: Option<String>,
}


/// Initial setup of the tracing subscriber. Logs go to stderr, stdout is for status lines.
fn setup_logger(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.get_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}


/// Handle --add: store the domain in the XDG domain list
fn add_domain_entry(entry: &str) -> Result<(), ExpiryError> {
    let (domain, invalid_threshold) = Domain::parse_entry(entry)?;
    if let Some(value) = invalid_threshold {
        println!(
            "Invalid threshold value: {}. Using default: {} days",
            value, DEFAULT_THRESHOLD
        );
    }
    match add_domain(&domains_file_path()?, domain)? {
        Saved::Added(domain) => {
            println!(
                "Added domain {} with threshold {} days",
                domain.name, domain.threshold
            )
        }
        Saved::Updated(domain) => {
            println!(
                "Updated domain {} with threshold {} days",
                domain.name, domain.threshold
            )
        }
    }
    Ok(())
}


#[actix_macros::main]
async fn main() {
    let cli = Cli::parse();
    let loaded_config = Config::load();
    let config = loaded_config.as_ref().cloned().unwrap_or_default();
    setup_logger(&config);
    if let Err(err) = &loaded_config {
        error!("{}. Using defaults", err);
    }
    debug!("Starting expirybot v{}", env!("CARGO_PKG_VERSION"));

    if let Some(entry) = cli.add {
        if let Err(err) = add_domain_entry(&entry) {
            println!("{}", err);
            process::exit(1);
        }
        return;
    }

    let domains_file = match cli.file.map_or_else(domains_file_path, Ok) {
        Ok(path) => path,
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    };

    if !domains_file.exists() {
        println!("{}", NO_DOMAINS_MESSAGE);
        return;
    }

    let domains = match read_domains_from_file(&domains_file) {
        Ok(domains) => domains,
        Err(err) => {
            println!("Error reading domains file: {}", err);
            process::exit(1);
        }
    };

    if domains.is_empty() {
        println!("{}", NO_DOMAINS_MESSAGE);
        return;
    }

    let settings = config.settings();
    let reporter = Reporter::stdout().start();
    check_domains_parallel(
        &domains,
        settings,
        Arc::new(SystemNetwork::new(settings.check_timeout)),
        &reporter,
    )
    .await;
}
