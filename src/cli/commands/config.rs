use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::missing_fields;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};

use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults are used). Run `wellness init`.",
                    path.display()
                ));
            } else {
                let missing = missing_fields(&fs::read_to_string(path)?)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    for key in &missing {
                        warning(format!("Missing field '{key}' (default value is used)"));
                    }
                }
                cfg.validate()?;
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.clone());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    if run_editor(&editor_to_use, path) {
        success(format!(
            "Configuration file edited successfully using '{}'",
            editor_to_use
        ));
        return;
    }

    warning(format!(
        "Editor '{}' not available, falling back to '{}'",
        editor_to_use, default_editor
    ));

    if run_editor(&default_editor, path) {
        info(format!("Configuration file edited using fallback '{}'", default_editor));
    } else {
        error(format!(
            "Failed to edit configuration file using fallback '{}'",
            default_editor
        ));
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
