//! Config command handler

use crate::args::ConfigSubcommand;
use nu_roster::config::Config;
use nu_roster::info;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands, exiting with status 1 on failure
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None => {
            show(config, None);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key }) => {
            show(config, key.as_deref());
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = outcome {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Print one value, or the whole configuration when no key is given
fn show(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        },
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Config key {key} set to {value}");
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Config key {key} reset to default");
    println!("✓ Reset {key} to default");
    Ok(())
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    let stdin = io::stdin();
    if !confirm(
        "Are you sure you want to reset config to defaults? (y/n): ",
        &mut stdin.lock(),
    ) {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

/// Ask a yes/no question; anything but `y`/`yes` counts as no
fn confirm<R: BufRead>(question: &str, input: &mut R) -> bool {
    print!("{question}");
    io::stdout().flush().ok();

    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_accepts_yes() {
        assert!(confirm("? ", &mut "y\n".as_bytes()));
        assert!(confirm("? ", &mut "YES\n".as_bytes()));
    }

    #[test]
    fn test_confirm_rejects_anything_else() {
        assert!(!confirm("? ", &mut "n\n".as_bytes()));
        assert!(!confirm("? ", &mut "sure\n".as_bytes()));
        assert!(!confirm("? ", &mut "".as_bytes()));
    }
}
