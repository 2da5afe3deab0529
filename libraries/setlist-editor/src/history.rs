//! Undo/redo transaction history
//!
//! A linear stack of [`Command`]s split by a pointer:
//!
//! ```text
//! stack:    [ C0  C1  C2 | C3  C4 ]
//!                         ^ pointer = 3
//!           applied       redoable
//! ```
//!
//! Recording while redoable commands exist throws them away. The stack is
//! bounded; once full, the oldest command is dropped and can no longer be
//! undone.

use crate::command::Command;
use crate::config::DEFAULT_HISTORY_CAPACITY;
use setlist_core::{Song, SongId};
use std::collections::VecDeque;

/// Bounded, branch-discarding undo/redo stack
#[derive(Debug, Clone)]
pub struct TransactionHistory {
    /// Recorded commands (oldest = front)
    stack: VecDeque<Command>,

    /// Number of applied commands; `stack[pointer..]` can be redone
    pointer: usize,

    /// Maximum stack length
    capacity: usize,
}

impl TransactionHistory {
    /// Create an empty history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding at most `capacity` commands
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            stack: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            pointer: 0,
            capacity,
        }
    }

    /// Record `command` and apply it to `songs`
    ///
    /// Any redoable commands are discarded first.
    pub fn record(&mut self, command: Command, songs: &[Song]) -> Vec<Song> {
        self.stack.truncate(self.pointer);
        self.stack.push_back(command);
        self.pointer += 1;

        if self.stack.len() > self.capacity {
            self.stack.pop_front();
            self.pointer -= 1;
        }

        debug_assert_eq!(self.pointer, self.stack.len());

        self.stack[self.pointer - 1].apply(songs)
    }

    /// Undo the most recent applied command
    ///
    /// Returns `None` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self, songs: &[Song]) -> Option<Vec<Song>> {
        if !self.can_undo() {
            return None;
        }
        self.pointer -= 1;
        Some(self.stack[self.pointer].revert(songs))
    }

    /// Re-apply the next undone command
    ///
    /// Returns `None` (and changes nothing) when there is nothing to redo.
    pub fn redo(&mut self, songs: &[Song]) -> Option<Vec<Song>> {
        if !self.can_redo() {
            return None;
        }
        let next = self.stack[self.pointer].apply(songs);
        self.pointer += 1;
        Some(next)
    }

    /// Whether an applied command exists
    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Whether an undone command exists
    pub fn can_redo(&self) -> bool {
        self.pointer < self.stack.len()
    }

    /// Number of applied commands
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of recorded commands (applied and redoable)
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Maximum number of recorded commands
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recorded commands, oldest first
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.stack.iter()
    }

    /// Command that `undo` would revert
    pub fn peek_undo(&self) -> Option<&Command> {
        self.pointer.checked_sub(1).and_then(|i| self.stack.get(i))
    }

    /// Command that `redo` would apply
    pub fn peek_redo(&self) -> Option<&Command> {
        self.stack.get(self.pointer)
    }

    /// Forget every command
    pub fn clear(&mut self) {
        self.stack.clear();
        self.pointer = 0;
    }

    /// Copy store-assigned ids into recorded song snapshots
    ///
    /// `assigned` pairs an id-less song value with the id the store gave it.
    /// Applied commands are visited newest first so edits chained through
    /// `Replace` resolve back to the original insert. Values inserted more
    /// than once are skipped since their snapshots cannot be told apart.
    /// Returns the number of snapshots updated.
    pub fn assign_ids(&mut self, assigned: &[(Song, SongId)]) -> usize {
        let inserted = |value: &Song| {
            self.stack
                .iter()
                .filter(|command| matches!(command, Command::Insert { song, .. } if song == value))
                .count()
        };
        let mut known: Vec<(Song, SongId)> = assigned
            .iter()
            .filter(|(song, _)| inserted(song) <= 1)
            .cloned()
            .collect();
        let pointer = self.pointer;
        let mut updated = 0;

        for command in self.stack.range_mut(..pointer).rev() {
            updated += command.assign_ids(&mut known);
        }
        for command in self.stack.range_mut(pointer..) {
            updated += command.assign_ids(&mut known);
        }
        updated
    }
}

impl Default for TransactionHistory {
    fn default() -> Self {
        Self::new()
    }
}
