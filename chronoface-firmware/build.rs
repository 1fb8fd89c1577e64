//! Build script for chronoface-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates watch.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const FACES: [&str; 2] = ["digital", "neon"];
const CLOCK_TYPES: [&str; 2] = ["12h", "24h"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Linker scripts for cortex-m-rt and defmt
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate watch.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=watch.toml");

    let config_path = Path::new("watch.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: watch.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a watch.toml configuration file.            ║\n\
            ║  Please create one in the chronoface-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read watch.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in watch.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_refresh(&config, &mut errors);
    validate_choice(&config, "face", "default", &FACES, &mut errors);
    validate_choice(&config, "settings", "clock_type", &CLOCK_TYPES, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid watch configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=watch.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only known sections, each a table
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };

    for (name, value) in table {
        match name.as_str() {
            "refresh" | "face" | "settings" => {
                if !value.is_table() {
                    errors.push(format!("[{}] must be a table", name));
                }
            }
            _ => errors.push(format!("unknown section [{}]", name)),
        }
    }
}

fn validate_refresh(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(refresh) = config.get("refresh").and_then(|r| r.as_table()) else {
        return;
    };

    for (key, value) in refresh {
        if key != "period_ms" {
            errors.push(format!("[refresh] unknown key '{}'", key));
            continue;
        }
        match value {
            toml::Value::Integer(ms) if *ms >= 1 && *ms <= u32::MAX as i64 => {}
            toml::Value::Integer(_) => {
                errors.push("[refresh] period_ms must be at least 1".to_string())
            }
            _ => errors.push("[refresh] period_ms must be an integer".to_string()),
        }
    }
}

/// `[section] key` is optional, but if present must be one of `allowed`
fn validate_choice(
    config: &toml::Value,
    section: &str,
    key: &str,
    allowed: &[&str],
    errors: &mut Vec<String>,
) {
    let Some(table) = config.get(section).and_then(|s| s.as_table()) else {
        return;
    };

    for (name, value) in table {
        if name != key {
            errors.push(format!("[{}] unknown key '{}'", section, name));
            continue;
        }
        match value.as_str() {
            Some(v) if allowed.contains(&v) => {}
            _ => errors.push(format!(
                "[{}] {} must be one of: {}",
                section,
                key,
                allowed.join(", ")
            )),
        }
    }
}
