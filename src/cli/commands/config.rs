//! Config command handler

use crate::args::ConfigSubcommand;
use dialoguer::Confirm;
use gradebook::config::Config;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_reset(),
    }
}

/// Print a single config value, or the whole configuration
fn handle_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        }
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
}

/// Set a config value and persist it
fn handle_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }

    println!("✓ Set {key} = {value}");
}

/// Reset a single config value to its default and persist
fn handle_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }

    println!("✓ Reset {key} to default");
}

/// Delete the config file after confirmation; destructive
fn handle_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    let confirmed = Confirm::new()
        .with_prompt("Are you sure you want to reset config to defaults?")
        .default(false)
        .interact()
        .unwrap_or(false);

    if confirmed {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
