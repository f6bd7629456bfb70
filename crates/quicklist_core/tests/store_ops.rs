use quicklist_core::{TodoStore, ValidationError};
use std::collections::HashSet;

#[test]
fn adds_keep_count_unique_ids_and_newest_first() {
    let mut store = TodoStore::new();
    let texts = ["one", "two", "three", "four", "five"];
    for text in texts {
        store.add(text).unwrap();
    }

    assert_eq!(store.len(), texts.len());

    let ids: HashSet<_> = store.items().iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids.len(), texts.len());

    let listed: Vec<_> = store.items().iter().map(|item| item.text.as_str()).collect();
    assert_eq!(listed, ["five", "four", "three", "two", "one"]);
}

#[test]
fn empty_and_whitespace_adds_never_change_length() {
    let mut store = TodoStore::new();
    store.add("real entry").unwrap();

    assert_eq!(store.add("").unwrap_err(), ValidationError::EmptyText);
    assert_eq!(store.add("   ").unwrap_err(), ValidationError::EmptyText);
    assert_eq!(store.add(" \t\n ").unwrap_err(), ValidationError::EmptyText);
    assert_eq!(store.len(), 1);
}

#[test]
fn toggle_is_idempotent_under_double_application() {
    let mut store = TodoStore::new();
    let id = store.add("flip me").unwrap().id.clone();

    assert!(store.toggle(&id));
    assert!(store.items()[0].done);

    assert!(store.toggle(&id));
    assert!(!store.items()[0].done);
}

#[test]
fn toggle_unknown_id_is_a_noop() {
    let mut store = TodoStore::new();
    store.add("only item").unwrap();
    let snapshot = store.items().to_vec();

    assert!(!store.toggle("no-such-id"));
    assert_eq!(store.items(), snapshot.as_slice());
}

#[test]
fn commit_edit_preserves_id_done_and_position() {
    let mut store = TodoStore::new();
    store.add("bottom").unwrap();
    let target_id = store.add("middle").unwrap().id.clone();
    store.add("top").unwrap();
    store.toggle(&target_id);

    store.begin_edit(&target_id);
    let changed = store.commit_edit(&target_id, "  middle edited  ").unwrap();
    assert!(changed);

    let item = &store.items()[1];
    assert_eq!(item.id, target_id);
    assert_eq!(item.text, "middle edited");
    assert!(item.done);
    assert_eq!(store.items()[0].text, "top");
    assert_eq!(store.items()[2].text, "bottom");
    assert!(store.editing().is_none());
}

#[test]
fn commit_edit_with_empty_text_leaves_text_unchanged() {
    let mut store = TodoStore::new();
    let id = store.add("original").unwrap().id.clone();
    store.begin_edit(&id);

    assert_eq!(
        store.commit_edit(&id, "").unwrap_err(),
        ValidationError::EmptyText
    );
    assert_eq!(store.items()[0].text, "original");
}

#[test]
fn delete_removes_exactly_one_item_without_reordering() {
    let mut store = TodoStore::new();
    store.add("c").unwrap();
    let victim_id = store.add("b").unwrap().id.clone();
    store.add("a").unwrap();

    assert!(store.remove(&victim_id));
    let remaining: Vec<_> = store.items().iter().map(|item| item.text.as_str()).collect();
    assert_eq!(remaining, ["a", "c"]);

    assert!(!store.remove(&victim_id));
    assert_eq!(store.len(), 2);
}

#[test]
fn clear_empties_a_non_empty_list_and_noops_when_empty() {
    let mut store = TodoStore::new();
    store.add("x").unwrap();
    store.add("y").unwrap();

    assert!(store.clear());
    assert!(store.is_empty());
    assert!(!store.clear());
}
