// CLI module - command-line argument parsing and handlers
//
// Provides:
// - --fixture <PATH>: seed the storefront from a JSON product list
// - catalog: print the seeded catalog and exit
// - config --show|--path|--reset: configuration management

use crate::catalog::{fixture, Catalog};
use crate::config::{Config, VERSION};
use crate::tui::components::formatters::{format_price, format_review_count};
use crate::tui::components::rating_stars::stars_text;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Tech Shop - terminal storefront with product details and reviews
#[derive(Parser)]
#[command(name = "techshop")]
#[command(version = VERSION)]
#[command(about = "Terminal storefront with product details and reviews", long_about = None)]
pub struct Cli {
    /// JSON product list to seed the catalog from (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the catalog and exit
    Catalog,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Fixture to seed from: the flag wins over config
    pub fn fixture_path(&self, config: &Config) -> Option<PathBuf> {
        self.fixture.clone().or_else(|| config.fixture.clone())
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli, config: &Config) -> Result<bool> {
    match &cli.command {
        Some(Commands::Catalog) => {
            let catalog = fixture::seed(cli.fixture_path(config).as_deref())?;
            print_catalog(&catalog, &config.shop_name);
            Ok(true)
        }
        Some(Commands::Config { show, path, reset }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show(config);
            } else if *reset {
                handle_config_reset();
            } else {
                println!("Usage: techshop config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

fn print_catalog(catalog: &Catalog, shop_name: &str) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}{shop_name}{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}{} products{RESET}", catalog.len());
    println!();

    for product in catalog.products() {
        println!(
            "  {DIM}#{:<3}{RESET} {BOLD}{}{RESET}",
            product.id, product.name
        );
        println!(
            "       {YELLOW}{}{RESET} {:.1}  {DIM}{}{RESET}  {GREEN}{}{RESET}",
            stars_text(product.rating),
            product.rating,
            format_review_count(product.review_count()),
            format_price(product.price)
        );
    }
    println!();
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_flag_overrides_config() {
        let config = Config {
            fixture: Some(PathBuf::from("from-config.json")),
            ..Config::default()
        };

        let cli = Cli::parse_from(["techshop", "--fixture", "flag.json"]);
        assert_eq!(cli.fixture_path(&config), Some(PathBuf::from("flag.json")));

        let cli = Cli::parse_from(["techshop"]);
        assert_eq!(
            cli.fixture_path(&config),
            Some(PathBuf::from("from-config.json"))
        );
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::parse_from(["techshop", "catalog", "--fixture", "p.json"]);
        assert!(matches!(cli.command, Some(Commands::Catalog)));
        assert_eq!(cli.fixture, Some(PathBuf::from("p.json")));

        let cli = Cli::parse_from(["techshop", "config", "--show"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { show: true, .. })
        ));
    }

    #[test]
    fn missing_fixture_is_an_error() {
        let cli = Cli::parse_from(["techshop", "catalog", "--fixture", "/nonexistent/p.json"]);
        assert!(handle_command(&cli, &Config::default()).is_err());
    }
}
