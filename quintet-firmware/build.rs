//! Build script for quintet-firmware
//!
//! - Sets up linker search paths for memory.x and the linker scripts
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in each section
const DISPLAY_KEYS: &[&str] = &[
    "brightness_level",
    "brightness_mode",
    "numeral_set",
    "refresh_period_us",
];
const ANIMATION_KEYS: &[&str] = &["fade_step_ms", "hold_ms", "greeting"];

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

    // Linker scripts from cortex-m-rt, embassy-rp and defmt
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml configuration at compile time
fn validate_config() {
    // Re-run if display.toml changes
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a display.toml configuration file.          ║\n\
            ║  Please create one in the quintet-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
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
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
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
    validate_display(&config, &mut errors);
    validate_animation(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
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

    println!("cargo:warning=display.toml validated successfully");
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

/// Only [display] and [animation] may appear, each with its own keys
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        errors.push("display.toml must be a table".to_string());
        return;
    };

    for (name, value) in root {
        let allowed = match name.as_str() {
            "display" => DISPLAY_KEYS,
            "animation" => ANIMATION_KEYS,
            _ => {
                errors.push(format!("unknown section or top-level key '{}'", name));
                continue;
            }
        };

        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", name));
            continue;
        };

        for key in table.keys() {
            if !allowed.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
            }
        }
    }
}

/// Check an optional integer key against an inclusive range
fn check_range(
    table: &toml::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

/// Validate the [display] section
fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display").and_then(|d| d.as_table()) else {
        return;
    };

    check_range(display, "display", "brightness_level", 0, 19, errors);
    check_range(display, "display", "numeral_set", 0, 9, errors);
    check_range(display, "display", "refresh_period_us", 16, 200, errors);

    match display.get("brightness_mode") {
        None => {}
        Some(toml::Value::String(mode)) if ["low", "medium", "high"].contains(&mode.as_str()) => {}
        Some(_) => errors.push(
            "[display] brightness_mode must be 'low', 'medium', or 'high'".to_string(),
        ),
    }
}

/// Validate the [animation] section
fn validate_animation(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(animation) = config.get("animation").and_then(|a| a.as_table()) else {
        return;
    };

    check_range(animation, "animation", "fade_step_ms", 1, 1000, errors);
    check_range(animation, "animation", "hold_ms", 0, u32::MAX as i64, errors);

    match animation.get("greeting") {
        None => {}
        Some(toml::Value::String(greeting)) => {
            if greeting.len() > 5 {
                errors.push("[animation] greeting must be at most 5 characters".to_string());
            }
            if !greeting.is_ascii() {
                errors.push("[animation] greeting must be ASCII".to_string());
            }
            // Shown through the glyph table, which covers ' ' to 'e'
            if greeting.bytes().any(|b| !(b' '..=b'e').contains(&b)) {
                println!(
                    "cargo:warning=greeting '{}' has characters outside the glyph table; they render blank",
                    greeting
                );
            }
        }
        Some(_) => errors.push("[animation] greeting must be a string".to_string()),
    }
}
