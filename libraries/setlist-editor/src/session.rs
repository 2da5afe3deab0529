//! Playlist edit session
//!
//! One [`EditSession`] exists per open playlist editor. It owns the local
//! working copy of the playlist and its undo history, and pushes the full
//! song list to the remote store after every local change.
//!
//! Local changes are synchronous and take effect immediately. Remote writes
//! are spawned onto the tokio runtime and are not awaited before the next
//! action, so several may be in flight at once; each carries a complete
//! snapshot and the last one to land wins. Callers that care about the
//! outcome hold on to the returned [`PendingWrite`] and pass it to
//! [`EditSession::settle`]; dropping it lets the write finish unobserved.
//!
//! A rename that the store rejects is rolled back to the last name the
//! store accepted, otherwise every later write would carry it too. A
//! publish is only final once a write carrying it has settled; until then
//! `publish` may be called again to re-issue it.
//!
//! Actions that issue a write must be called from within a tokio runtime.

use crate::command::Command;
use crate::config::EditorConfig;
use crate::error::{EditError, Result};
use crate::history::TransactionHistory;
use setlist_core::{
    PlaylistDocument, PlaylistId, PlaylistInput, PlaylistStore, SelectionStore, Song,
    SongFields, SongId,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Local copy of the playlist being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistWorkingState {
    /// Playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Ordered song list
    pub songs: Vec<Song>,

    /// Publication flag, never reset once set
    pub published: bool,
}

impl From<PlaylistDocument> for PlaylistWorkingState {
    fn from(document: PlaylistDocument) -> Self {
        Self {
            id: document.id,
            name: document.name,
            songs: document.songs,
            published: document.published,
        }
    }
}

impl PlaylistWorkingState {
    fn to_input(&self) -> PlaylistInput {
        PlaylistInput {
            name: self.name.clone(),
            songs: self.songs.clone(),
            published: self.published,
        }
    }
}

/// Handle to an in-flight remote write
///
/// Dropping the handle detaches the write; it still runs to completion.
#[derive(Debug)]
#[must_use = "dropping a PendingWrite ignores whether the remote write succeeded"]
pub struct PendingWrite {
    revision: u64,
    /// Name this write introduced, if it was a rename
    renamed_to: Option<String>,
    handle: JoinHandle<setlist_core::Result<PlaylistDocument>>,
}

impl PendingWrite {
    /// Local revision this write was issued for
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the write has already completed
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the store's answer
    pub async fn wait(self) -> Result<PlaylistDocument> {
        match self.handle.await {
            Ok(result) => result.map_err(EditError::from),
            Err(e) => Err(EditError::WriteAborted(e.to_string())),
        }
    }
}

/// Edit session for one playlist
pub struct EditSession<S: PlaylistStore + ?Sized, C: SelectionStore> {
    store: Arc<S>,
    selection: C,
    state: PlaylistWorkingState,
    history: TransactionHistory,
    config: EditorConfig,

    /// Bumped on every local change; tags outgoing writes
    revision: u64,

    /// Last name the store accepted
    confirmed_name: String,

    /// Whether a write carrying `published = true` has settled
    publish_confirmed: bool,
}

impl<S, C> EditSession<S, C>
where
    S: PlaylistStore + ?Sized + 'static,
    C: SelectionStore,
{
    /// Load a playlist from the store and start editing it
    pub async fn open(
        store: Arc<S>,
        selection: C,
        id: PlaylistId,
        config: EditorConfig,
    ) -> Result<Self> {
        let document = store.fetch_playlist(&id).await?;

        info!(
            playlist_id = %id,
            songs = document.songs.len(),
            published = document.published,
            "Opened playlist for editing"
        );

        Ok(Self::from_document(store, selection, document, config))
    }

    /// Start editing an already fetched document
    pub fn from_document(
        store: Arc<S>,
        selection: C,
        document: PlaylistDocument,
        config: EditorConfig,
    ) -> Self {
        Self {
            store,
            selection,
            confirmed_name: document.name.clone(),
            publish_confirmed: document.published,
            state: document.into(),
            history: TransactionHistory::with_capacity(config.history_capacity),
            config,
            revision: 0,
        }
    }

    // ===== Accessors =====

    /// Current working state
    pub fn state(&self) -> &PlaylistWorkingState {
        &self.state
    }

    /// Current song list
    pub fn songs(&self) -> &[Song] {
        &self.state.songs
    }

    /// Undo history
    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    /// Whether `undo` would change anything
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether `redo` would change anything
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether the playlist has been published
    pub fn is_published(&self) -> bool {
        self.state.published
    }

    /// Local revision, bumped on every local change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ===== Actions =====

    /// Append a placeholder song
    pub fn create_song(&mut self) -> Result<PendingWrite> {
        self.ensure_editable()?;

        let index = self.state.songs.len();
        let song = self.config.placeholder_song();
        self.record(Command::Insert { index, song });

        Ok(self.push_state())
    }

    /// Remove the song at `index`
    ///
    /// If the removed song was selected, the selection moves to the song
    /// that takes its place, wraps to the first song when the last one was
    /// removed, and is cleared when the list becomes empty.
    pub fn remove_song(&mut self, index: usize) -> Result<PendingWrite> {
        self.ensure_editable()?;
        self.check_index(index)?;

        let song = self.state.songs[index].clone();
        self.record(Command::Remove {
            index,
            song: song.clone(),
        });
        self.reassign_selection(&song, index);

        Ok(self.push_state())
    }

    /// Replace the fields of the song at `index`, keeping its id
    pub fn edit_song(&mut self, index: usize, fields: SongFields) -> Result<PendingWrite> {
        self.ensure_editable()?;
        self.check_index(index)?;

        let old = self.state.songs[index].clone();
        let new = old.replaced_with(fields);
        self.record(Command::Replace { index, old, new });

        Ok(self.push_state())
    }

    /// Move the song at `from` to `to`
    ///
    /// Returns `None` without recording anything when `from == to`.
    pub fn move_song(&mut self, from: usize, to: usize) -> Result<Option<PendingWrite>> {
        self.ensure_editable()?;
        if from == to {
            return Ok(None);
        }
        self.check_index(from)?;
        self.check_index(to)?;

        self.record(Command::Move { from, to });

        Ok(Some(self.push_state()))
    }

    /// Undo the last applied command
    ///
    /// Returns `None` when there is nothing to undo; no write is issued.
    pub fn undo(&mut self) -> Result<Option<PendingWrite>> {
        self.ensure_editable()?;

        let Some(songs) = self.history.undo(&self.state.songs) else {
            return Ok(None);
        };
        self.state.songs = songs;
        self.revision += 1;

        debug!(
            playlist_id = %self.state.id,
            pointer = self.history.pointer(),
            len = self.history.len(),
            "Undid command"
        );

        Ok(Some(self.push_state()))
    }

    /// Redo the last undone command
    ///
    /// Returns `None` when there is nothing to redo; no write is issued.
    pub fn redo(&mut self) -> Result<Option<PendingWrite>> {
        self.ensure_editable()?;

        let Some(songs) = self.history.redo(&self.state.songs) else {
            return Ok(None);
        };
        self.state.songs = songs;
        self.revision += 1;

        debug!(
            playlist_id = %self.state.id,
            pointer = self.history.pointer(),
            len = self.history.len(),
            "Redid command"
        );

        Ok(Some(self.push_state()))
    }

    /// Rename the playlist
    ///
    /// The name is document metadata and does not go through the history.
    /// If the store rejects it, [`settle`](Self::settle) restores the last
    /// accepted name.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<PendingWrite> {
        self.ensure_editable()?;

        self.state.name = name.into();
        self.revision += 1;

        let mut pending = self.push_state();
        pending.renamed_to = Some(self.state.name.clone());
        Ok(pending)
    }

    /// Publish the playlist
    ///
    /// Terminal: the history is dropped and every later edit is rejected.
    /// Calling it again before a publish write has settled successfully
    /// re-issues the write.
    pub fn publish(&mut self) -> Result<PendingWrite> {
        if self.state.published && !self.publish_confirmed {
            self.revision += 1;
            info!(playlist_id = %self.state.id, "Retrying publish");
            return Ok(self.push_state());
        }
        self.ensure_editable()?;

        self.state.published = true;
        self.history.clear();
        self.revision += 1;
        self.selection.mark_published(&self.state.id);

        info!(
            playlist_id = %self.state.id,
            songs = self.state.songs.len(),
            "Publishing playlist"
        );

        Ok(self.push_state())
    }

    /// Make the song at `index` the selected song
    pub fn select_song(&self, index: usize) -> Result<()> {
        self.check_index(index)?;

        let song_id = self.state.songs[index].id.clone();
        self.selection.set_selection(&self.state.id, song_id);
        Ok(())
    }

    /// Wait for a write and reconcile with the store's answer
    ///
    /// When no local change happened since the write was issued, the stored
    /// document replaces the working songs and name, which is how new songs
    /// pick up their ids. The ids are copied into the history as well, so
    /// undo brings back songs with the id the store knows them by.
    ///
    /// A failed write leaves songs and history as they are. A failed rename
    /// restores the last accepted name unless the name changed again since.
    pub async fn settle(&mut self, mut pending: PendingWrite) -> Result<PlaylistDocument> {
        let revision = pending.revision();
        let renamed_to = pending.renamed_to.take();

        let document = match pending.wait().await {
            Ok(document) => document,
            Err(e) => {
                if let Some(name) = renamed_to {
                    self.roll_back_rename(&name, &e);
                }
                return Err(e);
            }
        };

        self.confirmed_name.clone_from(&document.name);
        self.publish_confirmed |= document.published;

        if revision == self.revision {
            self.rebase_history_ids(&document.songs);
            self.state.name.clone_from(&document.name);
            self.state.songs.clone_from(&document.songs);
            self.state.published |= document.published;
        } else {
            debug!(
                playlist_id = %self.state.id,
                write_revision = revision,
                local_revision = self.revision,
                "Local state moved on, keeping it"
            );
        }

        Ok(document)
    }

    // ===== Internals =====

    fn ensure_editable(&self) -> Result<()> {
        if self.state.published {
            return Err(EditError::Published);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.state.songs.len();
        if index >= len {
            return Err(EditError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    fn record(&mut self, command: Command) {
        let kind = command.kind();
        self.state.songs = self.history.record(command, &self.state.songs);
        self.revision += 1;

        debug!(
            playlist_id = %self.state.id,
            kind,
            pointer = self.history.pointer(),
            len = self.history.len(),
            "Recorded command"
        );
    }

    fn reassign_selection(&self, removed: &Song, index: usize) {
        let Some(removed_id) = removed.id.as_ref() else {
            return;
        };
        if self.selection.selection(&self.state.id).as_ref() != Some(removed_id) {
            return;
        }

        let next = self
            .state
            .songs
            .get(index)
            .or_else(|| self.state.songs.first())
            .and_then(|song| song.id.clone());

        debug!(
            playlist_id = %self.state.id,
            removed = %removed_id,
            selected = ?next,
            "Selected song was removed"
        );
        self.selection.set_selection(&self.state.id, next);
    }

    fn roll_back_rename(&mut self, rejected: &str, error: &EditError) {
        if self.state.name != rejected || self.state.name == self.confirmed_name {
            return;
        }

        warn!(
            playlist_id = %self.state.id,
            rejected,
            restored = %self.confirmed_name,
            error = %error,
            "Rename rejected, restoring name"
        );
        self.state.name.clone_from(&self.confirmed_name);
        self.revision += 1;
    }

    /// Pair local id-less songs with the ids the store gave them
    ///
    /// Song values that occur more than once are skipped since there is
    /// no telling which snapshot belongs to which id.
    fn rebase_history_ids(&mut self, stored: &[Song]) {
        if stored.len() != self.state.songs.len() {
            return;
        }

        let pairs: Vec<(Song, SongId)> = self
            .state
            .songs
            .iter()
            .zip(stored)
            .filter(|(local, _)| local.id.is_none())
            .filter_map(|(local, remote)| Some((local.clone(), remote.id.clone()?)))
            .collect();
        let assigned: Vec<(Song, SongId)> = pairs
            .iter()
            .filter(|(song, _)| pairs.iter().filter(|(other, _)| other == song).count() == 1)
            .cloned()
            .collect();

        if assigned.is_empty() {
            return;
        }
        let updated = self.history.assign_ids(&assigned);
        debug!(
            playlist_id = %self.state.id,
            songs = assigned.len(),
            snapshots = updated,
            "Copied assigned ids into history"
        );
    }

    fn push_state(&self) -> PendingWrite {
        let store = Arc::clone(&self.store);
        let id = self.state.id.clone();
        let input = self.state.to_input();
        let revision = self.revision;

        let handle = tokio::spawn(async move {
            let result = store.write_playlist(&id, input).await;
            if let Err(e) = &result {
                warn!(playlist_id = %id, revision, error = %e, "Playlist write failed");
            }
            result
        });

        PendingWrite {
            revision,
            renamed_to: None,
            handle,
        }
    }
}
