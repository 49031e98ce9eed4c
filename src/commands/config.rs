//! Config subcommands handler

use anyhow::{Context, Result};

use starplay::theme::current_theme;
use starplay::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print the config file location.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration unless a file already exists.
pub fn handle_init() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if config_path.exists() {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "Config already exists at {}",
                config_path.display()
            ))
        );
        return Ok(());
    }

    Config::default().save()?;
    println!(
        "{}",
        theme.success_text(&format!("Created {}", config_path.display()))
    );
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    if !status.success() {
        anyhow::bail!("Editor '{}' exited with {}", editor, status);
    }

    // Surface mistakes now rather than on the next play
    Config::load().context("Config is invalid after editing")?;
    Ok(())
}
