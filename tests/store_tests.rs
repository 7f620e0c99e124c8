//! Bookmark store and view tests

use marks::interfaces::tui::app::{SelectionCursor, ViewState, compute_visible};
use marks::storage::{Bookmark, BookmarkStore, BookmarkUpdate, FileStorage};
use proptest::prelude::*;
use proptest::sample::Index;

fn bookmark(folder: &str, title: &str, url: &str) -> Bookmark {
    Bookmark::new(folder, title, url, "").unwrap()
}

#[test]
fn test_invalid_operations_leave_store_unchanged() {
    let mut store = BookmarkStore::from_bookmarks(vec![bookmark("F", "A", "u1")]);
    let before = store.all().to_vec();

    assert!(store.add(bookmark("F", "B", "u2")).is_ok());
    store.delete(1).unwrap();

    assert!(store.delete(5).is_err());
    assert!(store.move_to(0, "   ").is_err());
    assert!(store.update(0, BookmarkUpdate::new("", "u", "")).is_err());
    assert!(store.update(3, BookmarkUpdate::new("T", "u", "")).is_err());
    assert_eq!(store.all(), before.as_slice());
}

#[test]
fn test_folders_distinct_in_first_seen_order() {
    let store = BookmarkStore::from_bookmarks(vec![
        bookmark("Work", "a", "u"),
        bookmark("Home", "b", "u"),
        bookmark("Work", "c", "u"),
    ]);
    assert_eq!(store.folders(), vec!["Work".to_string(), "Home".to_string()]);
}

#[test]
fn test_unfiltered_view_equals_all() {
    let records = vec![bookmark("F", "A", "u1"), bookmark("G", "B", "u2")];
    let rows = compute_visible(&records, &ViewState::new());
    let indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn test_filtered_views_only_contain_matches() {
    let records = vec![
        bookmark("Dev", "Rust Book", "https://doc.rust-lang.org/book"),
        bookmark("News", "Rust blog", "https://blog.rust-lang.org"),
        bookmark("Dev", "Python", "https://python.org"),
    ];

    let view = ViewState::new().with_folder_filter("Dev");
    let rows = compute_visible(&records, &view);
    assert!(rows.iter().all(|r| r.bookmark.folder == "Dev"));
    assert_eq!(rows.len(), 2);

    let view = ViewState::new().with_search_query("RUST");
    let rows = compute_visible(&records, &view);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.bookmark.matches_query("rust")));

    let view = ViewState::new()
        .with_folder_filter("Dev")
        .with_search_query("rust");
    let rows = compute_visible(&records, &view);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].index, 0);
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Delete(Index),
    Move(Index, String),
    Edit(Index),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => Just(Op::Add),
        1 => any::<Index>().prop_map(Op::Delete),
        1 => (any::<Index>(), "[A-Z][a-z]{0,5}").prop_map(|(i, f)| Op::Move(i, f)),
        1 => any::<Index>().prop_map(Op::Edit),
    ]
}

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,6}( [a-zA-Z0-9]{1,6}){0,2}"
}

fn stored_bookmark() -> impl Strategy<Value = Bookmark> {
    (
        prop_oneof![Just("Dev"), Just("News"), Just("dev"), Just("Reading")],
        word(),
        word(),
        prop_oneof![Just(String::new()), word()],
    )
        .prop_map(|(folder, title, url, note)| Bookmark {
            title,
            url: format!("https://{}", url.replace(' ', "/")),
            folder: folder.to_string(),
            note,
        })
}

fn view() -> impl Strategy<Value = ViewState> {
    (
        prop::option::of(prop_oneof![Just("Dev"), Just("News"), Just("Reading")]),
        prop::option::of("[a-zA-Z]{0,3}"),
    )
        .prop_map(|(folder, query)| {
            let mut view = ViewState::new();
            if let Some(folder) = folder {
                view = view.with_folder_filter(folder);
            }
            if let Some(query) = query {
                view = view.with_search_query(query);
            }
            view
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_mutations_keep_count_and_order(ops in prop::collection::vec(op(), 0..120)) {
        let mut store = BookmarkStore::new();
        // Ids of surviving records in storage order
        let mut model: Vec<usize> = Vec::new();
        let (mut adds, mut deletes) = (0usize, 0usize);

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Add => {
                    store
                        .add(bookmark("F", &format!("t{}", step), &format!("https://{}", step)))
                        .unwrap();
                    model.push(step);
                    adds += 1;
                }
                Op::Delete(i) if !store.is_empty() => {
                    let index = i.index(store.len());
                    store.delete(index).unwrap();
                    model.remove(index);
                    deletes += 1;
                }
                Op::Move(i, folder) if !store.is_empty() => {
                    let index = i.index(store.len());
                    store.move_to(index, &folder).unwrap();
                    prop_assert_eq!(&store.get(index).unwrap().folder, &folder);
                }
                Op::Edit(i) if !store.is_empty() => {
                    let index = i.index(store.len());
                    let current = store.get(index).unwrap().clone();
                    store
                        .update(index, BookmarkUpdate::new(current.title, current.url, "edited"))
                        .unwrap();
                }
                _ => {}
            }
        }

        prop_assert_eq!(store.len(), adds - deletes);
        let titles: Vec<String> = store.all().iter().map(|b| b.title.clone()).collect();
        let expected: Vec<String> = model.iter().map(|id| format!("t{}", id)).collect();
        prop_assert_eq!(titles, expected);
    }

    #[test]
    fn prop_cursor_clamps_to_last_visible_row(index in 0usize..64, len in 0usize..64) {
        let cursor = SelectionCursor::at(index, len);
        let expected = len.checked_sub(1).map(|last| index.min(last));
        prop_assert_eq!(cursor.selected(), expected);
    }

    #[test]
    fn prop_cursor_moves_stay_in_bounds(
        moves in prop::collection::vec((0u8..6, 0usize..40), 0..60),
    ) {
        let mut cursor = SelectionCursor::new();
        for (kind, len) in moves {
            match kind {
                0 => cursor.move_up(len),
                1 => cursor.move_down(len),
                2 => cursor.page_up(len),
                3 => cursor.page_down(len),
                4 => cursor.move_top(len),
                _ => cursor.move_bottom(len),
            }
            match cursor.selected() {
                Some(i) => prop_assert!(i < len),
                None => prop_assert_eq!(len, 0),
            }
        }
    }

    #[test]
    fn prop_visible_rows_are_exactly_the_matches_in_order(
        records in prop::collection::vec(stored_bookmark(), 0..30),
        view in view(),
    ) {
        let rows = compute_visible(&records, &view);

        let expected: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                let folder_ok = view.folder_filter.as_deref().is_none_or(|f| b.folder == f);
                let query_ok = view
                    .search_query
                    .as_deref()
                    .is_none_or(|q| b.matches_query(&q.to_lowercase()));
                folder_ok && query_ok
            })
            .map(|(i, _)| i)
            .collect();
        let indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
        prop_assert_eq!(indices, expected);
        for row in &rows {
            prop_assert_eq!(row.bookmark, &records[row.index]);
        }
    }

    #[test]
    fn prop_save_then_load_round_trip(records in prop::collection::vec(stored_bookmark(), 0..20)) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("bookmarks.json"));
        storage.save(&records).unwrap();
        prop_assert_eq!(storage.load().unwrap(), records);
    }
}
