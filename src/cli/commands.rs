//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings, DEFAULT_CONFIG_FILE};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Run { roster, output_dir }) => {
            run(cli, roster.as_deref(), output_dir.as_deref())
        }
        Some(Commands::Preview { roster }) => preview(cli, roster.as_deref()),
        Some(Commands::Check { roster }) => check(cli, roster.as_deref()),
        Some(Commands::Config { command }) => config(cli, command),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Ok(()),
    }
}

fn load_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(ServiceContainer::new(settings))
}

/// Fail early with a clear message when the roster file is absent.
fn ensure_roster_exists(container: &ServiceContainer, roster: Option<&Path>) -> CliResult<()> {
    let path = roster.unwrap_or(&container.settings.roster_file);
    if !container.fs.exists(path) {
        return Err(InfraError::io(
            format!("roster not found: {}", path.display()),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        )
        .into());
    }
    Ok(())
}

#[instrument(skip(cli))]
fn run(cli: &Cli, roster: Option<&Path>, output_dir: Option<&Path>) -> CliResult<()> {
    let container = load_container(cli)?;
    ensure_roster_exists(&container, roster)?;

    let report = container.league().build_season(roster, output_dir)?;
    for team in &report.teams {
        output::action(
            "balanced",
            &format!(
                "Team {}: {} players, average height {:.2} in",
                team.name(),
                team.len(),
                team.average_height()
            ),
        );
    }
    output::success(&format!("{} files written", report.files_written.len()));
    Ok(())
}

#[instrument(skip(cli))]
fn preview(cli: &Cli, roster: Option<&Path>) -> CliResult<()> {
    let container = load_container(cli)?;
    ensure_roster_exists(&container, roster)?;

    let teams = container.league().preview(roster)?;
    for team in &teams {
        output::header(&format!(
            "Team {} ({} players, average height {:.2} in)",
            team.name(),
            team.len(),
            team.average_height()
        ));
        for player in team.players() {
            output::detail(&format!(
                "{} ({}, {} in, guardians: {})",
                player.name,
                player.experience_label(),
                player.height_inches,
                player.guardians
            ));
        }
    }
    Ok(())
}

#[instrument(skip(cli))]
fn check(cli: &Cli, roster: Option<&Path>) -> CliResult<()> {
    let container = load_container(cli)?;
    ensure_roster_exists(&container, roster)?;

    let stats = container.league().check(roster)?;
    output::detail(&format!("players: {}", stats.rows));
    output::detail(&format!("experienced: {}", stats.experienced));
    output::detail(&format!("novice: {}", stats.novice));
    output::success("roster is valid");
    Ok(())
}

fn config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { global } => config_init(*global),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", path.display())),
                None => output::detail("global: <unavailable>"),
            }
            output::detail(&format!("local:  ./{}", DEFAULT_CONFIG_FILE));
            Ok(())
        }
    }
}

fn config_init(global: bool) -> CliResult<()> {
    let path = if global {
        global_config_path().ok_or_else(|| {
            InfraError::io(
                "resolve global config directory".to_string(),
                io::Error::new(io::ErrorKind::NotFound, "no config directory"),
            )
        })?
    } else {
        Path::new(DEFAULT_CONFIG_FILE).to_path_buf()
    };
    debug!("config_init: path={}", path.display());

    if path.exists() {
        return Err(InfraError::io(
            format!("config file already exists: {}", path.display()),
            io::Error::new(io::ErrorKind::AlreadyExists, "refusing to overwrite"),
        )
        .into());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
        }
    }
    std::fs::write(&path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;

    output::success(&format!("created {}", path.display()));
    Ok(())
}

fn completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
