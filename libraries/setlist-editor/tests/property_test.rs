//! Property-based tests for the command model and transaction history
//!
//! Uses proptest to verify invariants across many random inputs.

use proptest::prelude::*;
use setlist_core::{Song, SongId};
use setlist_editor::command::{apply_insert, apply_move, apply_remove};
use setlist_editor::{Command, TransactionHistory};

// ===== Helpers =====

fn arbitrary_song() -> impl Strategy<Value = Song> {
    (
        proptest::option::of("[a-f0-9]{8}"), // id
        "[A-Za-z ]{1,20}",                   // title
        "[A-Za-z ]{1,15}",                   // artist
        "[A-Za-z0-9_-]{11}",                 // media ref
    )
        .prop_map(|(id, title, artist, media_ref)| Song {
            id: id.map(SongId::new),
            title,
            artist,
            media_ref,
        })
}

fn arbitrary_songs() -> impl Strategy<Value = Vec<Song>> {
    prop::collection::vec(arbitrary_song(), 0..20)
}

fn non_empty_songs() -> impl Strategy<Value = Vec<Song>> {
    prop::collection::vec(arbitrary_song(), 2..20)
}

/// Raw operation picked by the generator, turned into a valid command
/// against whatever list is current when it runs
#[derive(Debug, Clone)]
enum Op {
    Insert(usize, Song),
    Remove(usize),
    Move(usize, usize),
    Replace(usize, Song),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), arbitrary_song()).prop_map(|(i, s)| Op::Insert(i, s)),
        any::<usize>().prop_map(Op::Remove),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::Move(a, b)),
        (any::<usize>(), arbitrary_song()).prop_map(|(i, s)| Op::Replace(i, s)),
    ]
}

fn to_command(op: Op, songs: &[Song]) -> Option<Command> {
    let len = songs.len();
    match op {
        Op::Insert(i, song) => Some(Command::Insert {
            index: i % (len + 1),
            song,
        }),
        Op::Remove(i) if len > 0 => Some(Command::Remove {
            index: i % len,
            song: songs[i % len].clone(),
        }),
        Op::Move(a, b) if len > 1 && a % len != b % len => Some(Command::Move {
            from: a % len,
            to: b % len,
        }),
        Op::Replace(i, song) if len > 0 => Some(Command::Replace {
            index: i % len,
            old: songs[i % len].clone(),
            new: song,
        }),
        _ => None,
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: insert followed by remove at the same index is the identity
    #[test]
    fn insert_then_remove_restores_list(
        songs in arbitrary_songs(),
        song in arbitrary_song(),
        raw_index in any::<usize>()
    ) {
        let index = raw_index % (songs.len() + 1);

        let inserted = apply_insert(&songs, index, song.clone());
        let (restored, removed) = apply_remove(&inserted, index);

        prop_assert_eq!(restored, songs);
        prop_assert_eq!(removed, song);
    }

    /// Property: moving down then back up restores the order
    #[test]
    fn move_down_is_undone_by_move_up(
        songs in non_empty_songs(),
        a in any::<usize>(),
        b in any::<usize>()
    ) {
        let (from, to) = (a % songs.len(), b % songs.len());
        prop_assume!(from != to);
        let (from, to) = (from.min(to), from.max(to));

        let moved = apply_move(&songs, from, to);
        prop_assert_eq!(&moved[to], &songs[from]);
        prop_assert_eq!(apply_move(&moved, to, from), songs);
    }

    /// Property: moving up then back down restores the order
    #[test]
    fn move_up_is_undone_by_move_down(
        songs in non_empty_songs(),
        a in any::<usize>(),
        b in any::<usize>()
    ) {
        let (from, to) = (a % songs.len(), b % songs.len());
        prop_assume!(from != to);
        let (from, to) = (from.max(to), from.min(to));

        let moved = apply_move(&songs, from, to);
        prop_assert_eq!(&moved[to], &songs[from]);
        prop_assert_eq!(apply_move(&moved, to, from), songs);
    }

    /// Property: move never changes the length or the set of songs
    #[test]
    fn move_is_a_permutation(
        songs in non_empty_songs(),
        a in any::<usize>(),
        b in any::<usize>()
    ) {
        let moved = apply_move(&songs, a % songs.len(), b % songs.len());
        prop_assert_eq!(moved.len(), songs.len());
        for song in &songs {
            let before = songs.iter().filter(|s| *s == song).count();
            let after = moved.iter().filter(|s| *s == song).count();
            prop_assert_eq!(before, after);
        }
    }

    /// Property: undoing everything returns the starting list, redoing
    /// everything returns the final list
    #[test]
    fn undo_all_then_redo_all_round_trips(
        initial in arbitrary_songs(),
        ops in prop::collection::vec(arbitrary_op(), 1..30)
    ) {
        let mut history = TransactionHistory::with_capacity(ops.len());
        let mut songs = initial.clone();

        for op in ops {
            if let Some(command) = to_command(op, &songs) {
                songs = history.record(command, &songs);
            }
        }
        let final_songs = songs.clone();

        while let Some(previous) = history.undo(&songs) {
            songs = previous;
        }
        prop_assert_eq!(&songs, &initial);
        prop_assert_eq!(history.pointer(), 0);

        while let Some(next) = history.redo(&songs) {
            songs = next;
        }
        prop_assert_eq!(&songs, &final_songs);
        prop_assert_eq!(history.pointer(), history.len());
    }

    /// Property: can_undo/can_redo follow the pointer exactly, and the
    /// pointer never leaves [0, len]
    #[test]
    fn pointer_flags_are_consistent(
        initial in arbitrary_songs(),
        steps in prop::collection::vec((0u8..3, arbitrary_op()), 1..40),
        capacity in 1usize..10
    ) {
        let mut history = TransactionHistory::with_capacity(capacity);
        let mut songs = initial;

        for (action, op) in steps {
            match action {
                0 => {
                    if let Some(command) = to_command(op, &songs) {
                        songs = history.record(command, &songs);
                        prop_assert!(!history.can_redo());
                    }
                }
                1 => {
                    if let Some(previous) = history.undo(&songs) {
                        songs = previous;
                    }
                }
                _ => {
                    if let Some(next) = history.redo(&songs) {
                        songs = next;
                    }
                }
            }

            prop_assert!(history.pointer() <= history.len());
            prop_assert!(history.len() <= capacity);
            prop_assert_eq!(history.can_undo(), history.pointer() > 0);
            prop_assert_eq!(history.can_redo(), history.pointer() < history.len());
        }
    }
}
