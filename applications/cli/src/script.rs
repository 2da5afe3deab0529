//! Edit scripts
//!
//! A script is a list of operations, one per argument, applied in order to an
//! edit session:
//!
//! ```text
//! add
//! remove 2
//! move 0 3
//! edit 1 Hey Jude|The Beatles|A_MjCqQoLLA
//! rename Road Trip
//! select 0
//! undo
//! redo
//! publish
//! ```

use crate::error::{CliError, Result};
use setlist_core::{PlaylistStore, SelectionStore, SongFields};
use setlist_editor::{EditSession, PendingWrite};
use std::str::FromStr;
use tracing::info;

/// One scripted edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Add,
    Remove(usize),
    Move { from: usize, to: usize },
    Edit { index: usize, fields: SongFields },
    Rename(String),
    Select(usize),
    Undo,
    Redo,
    Publish,
}

impl FromStr for EditOp {
    type Err = CliError;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (verb, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(verb, rest)| (verb, rest.trim()));

        let op = match verb {
            "add" => EditOp::Add,
            "undo" => EditOp::Undo,
            "redo" => EditOp::Redo,
            "publish" => EditOp::Publish,
            "remove" => EditOp::Remove(parse_index(input, rest)?),
            "select" => EditOp::Select(parse_index(input, rest)?),
            "move" => {
                let (from, to) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| CliError::parse(input, "expected `move <from> <to>`"))?;
                EditOp::Move {
                    from: parse_index(input, from)?,
                    to: parse_index(input, to.trim())?,
                }
            }
            "edit" => {
                let (index, fields) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    CliError::parse(input, "expected `edit <index> <title>|<artist>|<ref>`")
                })?;
                let parts: Vec<&str> = fields.split('|').map(str::trim).collect();
                let [title, artist, media_ref] = parts[..] else {
                    return Err(CliError::parse(
                        input,
                        "expected exactly three `|`-separated fields",
                    ));
                };
                EditOp::Edit {
                    index: parse_index(input, index)?,
                    fields: SongFields::new(title, artist, media_ref),
                }
            }
            "rename" if !rest.is_empty() => EditOp::Rename(rest.to_string()),
            "rename" => return Err(CliError::parse(input, "expected a playlist name")),
            _ => return Err(CliError::parse(input, "unknown operation")),
        };

        if matches!(op, EditOp::Add | EditOp::Undo | EditOp::Redo | EditOp::Publish)
            && !rest.is_empty()
        {
            return Err(CliError::parse(input, "operation takes no arguments"));
        }

        Ok(op)
    }
}

fn parse_index(input: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .map_err(|_| CliError::parse(input, format!("'{}' is not a song index", raw.trim())))
}

/// Parse every argument of a script
pub fn parse_script<I, T>(ops: I) -> Result<Vec<EditOp>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    ops.into_iter().map(|op| op.as_ref().parse()).collect()
}

/// Apply one operation and wait for the store to answer
pub async fn apply<S, C>(session: &mut EditSession<S, C>, op: &EditOp) -> Result<()>
where
    S: PlaylistStore + ?Sized + 'static,
    C: SelectionStore,
{
    let write: Option<PendingWrite> = match op {
        EditOp::Add => Some(session.create_song()?),
        EditOp::Remove(index) => Some(session.remove_song(*index)?),
        EditOp::Move { from, to } => session.move_song(*from, *to)?,
        EditOp::Edit { index, fields } => Some(session.edit_song(*index, fields.clone())?),
        EditOp::Rename(name) => Some(session.rename(name.clone())?),
        EditOp::Select(index) => {
            session.select_song(*index)?;
            None
        }
        EditOp::Undo => session.undo()?,
        EditOp::Redo => session.redo()?,
        EditOp::Publish => Some(session.publish()?),
    };

    if let Some(write) = write {
        session.settle(write).await?;
    }

    info!(
        op = ?op,
        songs = session.songs().len(),
        can_undo = session.can_undo(),
        can_redo = session.can_redo(),
        "Applied edit"
    );
    Ok(())
}

/// Apply a whole script, stopping at the first failure
pub async fn run<S, C>(session: &mut EditSession<S, C>, ops: &[EditOp]) -> Result<()>
where
    S: PlaylistStore + ?Sized + 'static,
    C: SelectionStore,
{
    for op in ops {
        apply(session, op).await?;
    }
    Ok(())
}
