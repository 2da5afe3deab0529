//! Editable playlist operations
//!
//! Each operation is a pure function from one song list to the next. A
//! [`Command`] records one operation together with everything needed to
//! undo it, so applying its inverse never has to look at outside state.
//!
//! Indices handed to these functions are validated by the session first.
//! An out-of-range index here is a caller bug and panics.

use setlist_core::{Song, SongId};
use std::cmp::Ordering;

/// Insert `song` at `index`; `index == songs.len()` appends
pub fn apply_insert(songs: &[Song], index: usize, song: Song) -> Vec<Song> {
    let mut next = songs.to_vec();
    next.insert(index, song);
    next
}

/// Remove the song at `index`, returning the new list and the removed song
pub fn apply_remove(songs: &[Song], index: usize) -> (Vec<Song>, Song) {
    let mut next = songs.to_vec();
    let removed = next.remove(index);
    (next, removed)
}

/// Move the song at `from` so that it ends up at `to`
pub fn apply_move(songs: &[Song], from: usize, to: usize) -> Vec<Song> {
    let mut next = songs.to_vec();
    match from.cmp(&to) {
        // Downward: take it out, everything below shifts up by one
        Ordering::Less => {
            let song = next.remove(from);
            next.insert(to, song);
        }
        // Upward: place the copy first, the source shifts down by one
        Ordering::Greater => {
            let song = next[from].clone();
            next.insert(to, song);
            next.remove(from + 1);
        }
        Ordering::Equal => {}
    }
    next
}

/// Replace the song at `index`, returning the new list and the old song
pub fn apply_replace(songs: &[Song], index: usize, song: Song) -> (Vec<Song>, Song) {
    let mut next = songs.to_vec();
    let old = std::mem::replace(&mut next[index], song);
    (next, old)
}

/// A recorded edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `song` was inserted at `index`
    Insert {
        /// Insert position
        index: usize,
        /// Inserted song
        song: Song,
    },
    /// `song` was removed from `index`
    Remove {
        /// Removed position
        index: usize,
        /// Snapshot of the removed song
        song: Song,
    },
    /// The song at `from` was moved to `to`
    Move {
        /// Source position
        from: usize,
        /// Destination position
        to: usize,
    },
    /// The song at `index` was replaced
    Replace {
        /// Replaced position
        index: usize,
        /// Song before the edit
        old: Song,
        /// Song after the edit
        new: Song,
    },
}

impl Command {
    /// Apply this command to `songs`
    pub fn apply(&self, songs: &[Song]) -> Vec<Song> {
        match self {
            Command::Insert { index, song } => apply_insert(songs, *index, song.clone()),
            Command::Remove { index, .. } => apply_remove(songs, *index).0,
            Command::Move { from, to } => apply_move(songs, *from, *to),
            Command::Replace { index, new, .. } => apply_replace(songs, *index, new.clone()).0,
        }
    }

    /// The command that undoes this one
    #[must_use]
    pub fn inverse(&self) -> Command {
        match self {
            Command::Insert { index, song } => Command::Remove {
                index: *index,
                song: song.clone(),
            },
            Command::Remove { index, song } => Command::Insert {
                index: *index,
                song: song.clone(),
            },
            Command::Move { from, to } => Command::Move {
                from: *to,
                to: *from,
            },
            Command::Replace { index, old, new } => Command::Replace {
                index: *index,
                old: new.clone(),
                new: old.clone(),
            },
        }
    }

    /// Undo this command against `songs`
    pub fn revert(&self, songs: &[Song]) -> Vec<Song> {
        self.inverse().apply(songs)
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "insert",
            Command::Remove { .. } => "remove",
            Command::Move { .. } => "move",
            Command::Replace { .. } => "replace",
        }
    }

    /// Give id-less song snapshots the id the store assigned to them
    ///
    /// `known` maps id-less song values to their new ids. Both sides of a
    /// `Replace` are the same song, so when either side matches the other
    /// side's id-less value is added to `known`. Returns the number of
    /// snapshots updated.
    pub(crate) fn assign_ids(&mut self, known: &mut Vec<(Song, SongId)>) -> usize {
        match self {
            Command::Insert { song, .. } | Command::Remove { song, .. } => {
                match lookup_id(known, song) {
                    Some(id) => {
                        song.id = Some(id);
                        1
                    }
                    None => 0,
                }
            }
            Command::Move { .. } => 0,
            Command::Replace { old, new, .. } => {
                let Some(id) = lookup_id(known, new).or_else(|| lookup_id(known, old)) else {
                    return 0;
                };

                let mut updated = 0;
                for song in [old, new] {
                    if song.id.is_none() {
                        if lookup_id(known, song).is_none() {
                            known.push((song.clone(), id.clone()));
                        }
                        song.id = Some(id.clone());
                        updated += 1;
                    }
                }
                updated
            }
        }
    }
}

fn lookup_id(known: &[(Song, SongId)], song: &Song) -> Option<SongId> {
    if song.id.is_some() {
        return None;
    }
    known
        .iter()
        .find(|(value, _)| value == song)
        .map(|(_, id)| id.clone())
}
