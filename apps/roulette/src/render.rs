//! Turns results and session state into text or JSON for stdout.

use std::fmt::Write as _;

use serde::Serialize;
use shared::{domain::Member, error::ApiError, protocol::ResultPayload};

use crate::config::OutputFormat;

pub fn render_result(payload: &ResultPayload, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(payload)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for group in &payload.groups {
                let names: Vec<&str> = group.names().collect();
                writeln!(
                    out,
                    "Group {} ({}): {}",
                    group.number,
                    group.members.len(),
                    names.join(", ")
                )?;
            }
            write!(
                out,
                "{} members in {} groups (size {})",
                payload.total_members,
                payload.group_count(),
                payload.group_size
            )?;
            Ok(out)
        }
    }
}

pub fn render_error(error: &ApiError, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(error)?),
        OutputFormat::Text => Ok(format!("cannot roll: {}", error.message)),
    }
}

#[derive(Serialize)]
struct SelectionView<'a> {
    group_size: usize,
    selected: &'a [Member],
    unselected: &'a [Member],
}

pub fn render_selection(
    selected: &[Member],
    unselected: &[Member],
    group_size: usize,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SelectionView {
            group_size,
            selected,
            unselected,
        })?),
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "Selected ({}):", selected.len())?;
            for member in selected {
                writeln!(out, "  [x] {} ({})", member.name, member.id)?;
            }
            writeln!(out, "Unselected ({}):", unselected.len())?;
            for member in unselected {
                writeln!(out, "  [ ] {} ({})", member.name, member.id)?;
            }
            if group_size == 0 {
                write!(out, "Group size: unset")?;
            } else {
                write!(out, "Group size: {group_size}")?;
            }
            Ok(out)
        }
    }
}
