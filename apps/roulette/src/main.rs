use std::{io::Write, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use roster::RosterSource;
use roulette_core::Session;
use shared::{
    domain::{MemberId, RosterStatus},
    error::ApiError,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod interactive;
mod loader;
mod render;

use config::{load_settings, OutputFormat, Settings};
use loader::refresh_roster;
use render::{render_error, render_result, render_selection};

#[derive(Parser, Debug)]
#[command(name = "roulette", about = "Split a roster into random, balanced groups")]
struct Cli {
    /// Roster file (.json/.toml) or http(s) URL.
    #[arg(long, global = true)]
    roster: Option<String>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll the selection into groups once and print the result.
    Roll {
        #[arg(long)]
        size: Option<String>,
        /// Start from an empty selection and pick only these ids.
        #[arg(long)]
        only: Vec<String>,
        #[arg(long)]
        exclude: Vec<String>,
    },
    /// Print the roster split into selected and unselected members.
    Roster,
    /// Read selection commands from stdin.
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(roster) = cli.roster {
        settings.roster = Some(roster);
    }
    if let Some(output) = cli.output {
        settings.output = output;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let source = settings
        .roster
        .as_deref()
        .context("no roster configured; pass --roster or set `roster` in roulette.toml")?;
    let provider = RosterSource::parse(source)?.into_provider(settings.http_timeout())?;

    let mut session = Session::new(settings.initial_selection);
    session.set_group_size(settings.group_size);
    refresh_roster(&mut session, provider.as_ref()).await;
    if let RosterStatus::Failed(reason) = session.status() {
        bail!("could not load roster from {}: {reason}", provider.describe());
    }
    info!(session_id = %session.id(), "session started");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Roll {
            size,
            only,
            exclude,
        } => roll_once(&mut session, &settings, size, &only, &exclude, &mut stdout)?,
        Command::Roster => {
            let unselected = session.unselected();
            writeln!(
                stdout,
                "{}",
                render_selection(
                    session.selected(),
                    &unselected,
                    session.group_size(),
                    settings.output
                )?
            )?;
        }
        Command::Interactive => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            interactive::run(
                &mut session,
                provider.as_ref(),
                input,
                &mut stdout,
                settings.output,
            )
            .await?;
        }
    }

    Ok(())
}

fn roll_once<W: Write>(
    session: &mut Session,
    settings: &Settings,
    size: Option<String>,
    only: &[String],
    exclude: &[String],
    out: &mut W,
) -> Result<()> {
    if let Some(size) = size {
        session.set_group_size_input(&size);
    }
    if !only.is_empty() {
        session.unselect_all()?;
        for id in only {
            let id = MemberId::from(id.as_str());
            if !session.roster().iter().any(|m| m.id == id) {
                warn!(member_id = %id, "--only id is not in the roster");
            }
            session.select(&id)?;
        }
    }
    for id in exclude {
        session.unselect(&MemberId::from(id.as_str()))?;
    }

    match session.roll() {
        Ok(payload) => {
            writeln!(out, "{}", render_result(&payload, settings.output)?)?;
            Ok(())
        }
        Err(err) => {
            let api = ApiError::from(&err);
            writeln!(out, "{}", render_error(&api, settings.output)?)?;
            Err(err.into())
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
