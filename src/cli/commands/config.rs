//! Config command handler

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use uni_admissions::config::Config;

/// Keys accepted by `config get/set/unset`
const KEYS: [&str; 5] = ["level", "file", "verbose", "input_file", "out_dir"];

/// Dispatch config subcommands, exiting non-zero if one fails
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = result {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("Unknown config key: '{k}' (expected one of: {})", KEYS.join(", ")))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
