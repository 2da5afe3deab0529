/// Script execution tests
/// Runs parsed edit scripts against the in-memory store
use setlist_cli::script::{self, EditOp};
use setlist_cli::CliError;
use setlist_core::{PlaylistDocument, PlaylistId, SelectionStore, Song, UserId};
use setlist_editor::{EditError, EditSession, EditorConfig, MemoryPlaylistStore, SharedSelection};
use std::sync::Arc;

async fn session_with(
    titles: &[&str],
) -> (
    Arc<MemoryPlaylistStore>,
    SharedSelection,
    EditSession<MemoryPlaylistStore, SharedSelection>,
) {
    let user = UserId::new("alice");
    let store = Arc::new(MemoryPlaylistStore::new(user.clone()));
    let mut document = PlaylistDocument::new(PlaylistId::new("p1"), "Mix");
    document.songs = titles
        .iter()
        .map(|t| Song::new(*t, "Artist", format!("ref-{}", t)))
        .collect();
    store.insert(user, document).await;

    let selection = SharedSelection::new();
    let session = EditSession::open(
        Arc::clone(&store),
        selection.clone(),
        PlaylistId::new("p1"),
        EditorConfig::default(),
    )
    .await
    .unwrap();

    (store, selection, session)
}

fn titles(songs: &[Song]) -> Vec<&str> {
    songs.iter().map(|s| s.title.as_str()).collect()
}

#[tokio::test]
async fn test_script_edits_reach_the_store() {
    let (store, _selection, mut session) = session_with(&["A", "B", "C"]).await;

    let ops = script::parse_script(["move 0 2", "add", "edit 3 New|Someone|xyz", "rename Evening"])
        .unwrap();
    script::run(&mut session, &ops).await.unwrap();

    assert_eq!(titles(session.songs()), vec!["B", "C", "A", "New"]);

    let stored = store.get(&PlaylistId::new("p1")).await.unwrap();
    assert_eq!(titles(&stored.songs), vec!["B", "C", "A", "New"]);
    assert_eq!(stored.name, "Evening");
    assert!(stored.songs.iter().all(|s| s.id.is_some()));
}

#[tokio::test]
async fn test_undo_redo_script() {
    let (store, _selection, mut session) = session_with(&["A", "B", "C"]).await;

    let ops = script::parse_script(["remove 0", "remove 0", "undo", "undo", "redo"]).unwrap();
    script::run(&mut session, &ops).await.unwrap();

    assert_eq!(titles(session.songs()), vec!["B", "C"]);
    assert!(session.can_undo());
    assert!(session.can_redo());

    let stored = store.get(&PlaylistId::new("p1")).await.unwrap();
    assert_eq!(titles(&stored.songs), vec!["B", "C"]);
}

#[tokio::test]
async fn test_select_then_remove_moves_selection() {
    let (_store, selection, mut session) = session_with(&["A", "B", "C"]).await;

    script::run(&mut session, &[EditOp::Select(1), EditOp::Remove(1)])
        .await
        .unwrap();

    let selected = selection.selection(&PlaylistId::new("p1")).unwrap();
    let index = session
        .songs()
        .iter()
        .position(|s| s.id.as_ref() == Some(&selected))
        .unwrap();
    assert_eq!(session.songs()[index].title, "C");
}

#[tokio::test]
async fn test_script_stops_after_publish() {
    let (store, _selection, mut session) = session_with(&["A"]).await;

    let ops = script::parse_script(["publish", "add"]).unwrap();
    let err = script::run(&mut session, &ops).await.unwrap_err();

    assert!(matches!(err, CliError::Edit(EditError::Published)));
    assert_eq!(session.songs().len(), 1);
    assert!(store.get(&PlaylistId::new("p1")).await.unwrap().published);
}

#[tokio::test]
async fn test_out_of_range_index_is_reported() {
    let (_store, _selection, mut session) = session_with(&["A"]).await;

    let err = script::apply(&mut session, &EditOp::Remove(5))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CliError::Edit(EditError::IndexOutOfBounds { index: 5, len: 1 })
    ));
}
