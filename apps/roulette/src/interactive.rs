//! Line-oriented session: one command per line until `quit` or EOF.

use std::io::Write;

use roster::RosterProvider;
use roulette_core::{RouletteError, Session};
use shared::{
    domain::{MemberId, RosterStatus},
    error::ApiError,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    config::OutputFormat,
    loader::refresh_roster,
    render::{render_error, render_result, render_selection},
};

pub const HELP: &str = "\
commands:
  list              show selected and unselected members
  select <id>       move a member into the selection
  unselect <id>     move a member out of the selection
  all               select every member
  none              clear the selection
  size <n>          set the group size (blank or invalid text unsets it)
  roll              shuffle the selection into groups
  reload            fetch the roster again
  help              show this text
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    List,
    Select(MemberId),
    Unselect(MemberId),
    All,
    None,
    Size(String),
    Roll,
    Reload,
    Help,
    Quit,
}

/// `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    let needs_id = |make: fn(MemberId) -> ReplCommand| {
        if rest.is_empty() {
            Err(format!("`{word}` needs a member id"))
        } else {
            Ok(Some(make(MemberId::from(rest))))
        }
    };

    match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Some(ReplCommand::List)),
        "select" => needs_id(ReplCommand::Select),
        "unselect" => needs_id(ReplCommand::Unselect),
        "all" => Ok(Some(ReplCommand::All)),
        "none" => Ok(Some(ReplCommand::None)),
        "size" => Ok(Some(ReplCommand::Size(rest.to_string()))),
        "roll" => Ok(Some(ReplCommand::Roll)),
        "reload" => Ok(Some(ReplCommand::Reload)),
        "help" | "?" => Ok(Some(ReplCommand::Help)),
        "quit" | "exit" => Ok(Some(ReplCommand::Quit)),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

pub async fn run<R, W>(
    session: &mut Session,
    provider: &dyn RosterProvider,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{} members loaded; type `help` for commands", session.roster().len())?;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => writeln!(out, "{HELP}")?,
            ReplCommand::Reload => {
                refresh_roster(session, provider).await;
                match session.status() {
                    RosterStatus::Failed(reason) => {
                        writeln!(out, "roster reload failed: {reason}")?
                    }
                    _ => print_counts(session, out)?,
                }
            }
            ReplCommand::List => {
                let unselected = session.unselected();
                writeln!(
                    out,
                    "{}",
                    render_selection(session.selected(), &unselected, session.group_size(), format)?
                )?;
            }
            ReplCommand::Size(text) => match session.set_group_size_input(&text) {
                0 => writeln!(out, "group size unset")?,
                size => writeln!(out, "group size {size}")?,
            },
            ReplCommand::Roll => match session.roll() {
                Ok(payload) => writeln!(out, "{}", render_result(&payload, format)?)?,
                Err(err) => writeln!(out, "{}", render_error(&ApiError::from(&err), format)?)?,
            },
            ReplCommand::Select(id) => {
                if !session.roster().iter().any(|m| m.id == id) {
                    writeln!(out, "no member with id `{id}`")?;
                    continue;
                }
                let outcome = session.select(&id).map(|_| ());
                report(session, outcome, out)?;
            }
            ReplCommand::Unselect(id) => {
                let outcome = session.unselect(&id).map(|_| ());
                report(session, outcome, out)?;
            }
            ReplCommand::All => {
                let outcome = session.select_all().map(|_| ());
                report(session, outcome, out)?;
            }
            ReplCommand::None => {
                let outcome = session.unselect_all().map(|_| ());
                report(session, outcome, out)?;
            }
        }
    }
    Ok(())
}

fn report<W: Write>(
    session: &Session,
    outcome: Result<(), RouletteError>,
    out: &mut W,
) -> anyhow::Result<()> {
    match outcome {
        Ok(()) => print_counts(session, out),
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(())
        }
    }
}

fn print_counts<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    writeln!(
        out,
        "selected {} / unselected {}",
        session.selected().len(),
        session.unselected().len()
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/interactive_tests.rs"]
mod tests;
