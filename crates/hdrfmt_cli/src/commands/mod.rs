//! CLI command implementations.

pub mod render;
pub mod show_config;
pub mod write;

use hdrfmt_core::{Event, HeaderResult, Options};
use std::error::Error;
use std::io::BufRead;

/// Boxed error returned by the commands.
pub type CommandError = Box<dyn Error>;

/// Builds the option set from `key=value` assignments.
///
/// With a `prefix`, only keys under it are kept, with the prefix stripped.
pub fn build_options(assignments: &[String], prefix: Option<&str>) -> HeaderResult<Options> {
    let mut options = Options::new();
    for assignment in assignments {
        options.apply_assignment(assignment)?;
    }
    Ok(match prefix {
        Some(prefix) => options.sub_options(prefix),
        None => options,
    })
}

/// Reads JSON-lines events, skipping blank lines.
pub fn read_events<R: BufRead>(input: R) -> impl Iterator<Item = Result<Event, CommandError>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| -> Option<Result<Event, CommandError>> {
            match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(serde_json::from_str::<Event>(&line).map_err(|e| {
                    CommandError::from(format!("line {}: invalid event: {}", index + 1, e))
                })),
                Err(e) => Some(Err(CommandError::from(e))),
            }
        })
}
