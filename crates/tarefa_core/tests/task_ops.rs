use std::collections::HashSet;
use tarefa_core::{InMemoryTaskStore, TaskService, TaskStore};
use uuid::Uuid;

#[test]
fn adds_append_in_insertion_order_with_distinct_ids() {
    let mut store = InMemoryTaskStore::new();

    for title in ["first", "second", "third"] {
        store.add(title);
    }

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[0].title, "first");
    assert_eq!(snapshot[1].title, "second");
    assert_eq!(snapshot[2].title, "third");

    let ids: HashSet<_> = snapshot.iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn rapid_successive_adds_keep_ids_distinct() {
    let mut store = InMemoryTaskStore::new();

    for _ in 0..100 {
        store.add("same title");
    }

    let ids: HashSet<_> = store.snapshot().iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn blank_adds_are_silent_noops() {
    let mut store = InMemoryTaskStore::new();

    assert!(store.add("").is_empty());
    assert!(store.add("   ").is_empty());
    assert!(store.add("\t\n").is_empty());

    store.add("real");
    assert_eq!(store.snapshot().len(), 1);
    assert_eq!(store.add("  ").len(), 1);
}

#[test]
fn add_trims_surrounding_whitespace() {
    let mut store = InMemoryTaskStore::new();

    let snapshot = store.add("  Buy milk  ");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "Buy milk");
}

#[test]
fn toggle_flips_done_and_leaves_other_tasks_untouched() {
    let mut store = InMemoryTaskStore::new();
    store.add("a");
    store.add("b");
    let id_a = store.snapshot()[0].id;
    let before_b = store.snapshot()[1].clone();

    let snapshot = store.toggle(id_a);
    assert!(snapshot[0].done);
    assert_eq!(snapshot[1], before_b);
}

#[test]
fn toggle_is_its_own_inverse() {
    let mut store = InMemoryTaskStore::new();
    store.add("flip me");
    let id = store.snapshot()[0].id;
    let original = store.snapshot().to_vec();

    store.toggle(id);
    assert!(store.snapshot()[0].done);

    let restored = store.toggle(id);
    assert_eq!(restored, original.as_slice());
}

#[test]
fn toggle_unknown_id_leaves_collection_identical() {
    let mut store = InMemoryTaskStore::new();
    store.add("keep");
    let before = store.snapshot().to_vec();

    let after = store.toggle(Uuid::new_v4());
    assert_eq!(after, before.as_slice());
}

#[test]
fn delete_removes_exactly_one_and_preserves_relative_order() {
    let mut store = InMemoryTaskStore::new();
    store.add("a");
    store.add("b");
    store.add("c");
    let id_a = store.snapshot()[0].id;
    let id_b = store.snapshot()[1].id;
    let id_c = store.snapshot()[2].id;

    let snapshot = store.delete(id_b);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].id, id_a);
    assert_eq!(snapshot[1].id, id_c);
}

#[test]
fn delete_unknown_id_leaves_collection_identical() {
    let mut store = InMemoryTaskStore::new();
    store.add("keep");
    let before = store.snapshot().to_vec();

    let after = store.delete(Uuid::new_v4());
    assert_eq!(after, before.as_slice());
}

#[test]
fn empty_store_tolerates_all_operations() {
    let mut store = InMemoryTaskStore::new();

    assert!(store.toggle(Uuid::new_v4()).is_empty());
    assert!(store.delete(Uuid::new_v4()).is_empty());
    assert!(store.snapshot().is_empty());
}

#[test]
fn add_toggle_delete_end_to_end() {
    let mut store = InMemoryTaskStore::new();
    assert!(store.snapshot().is_empty());

    let snapshot = store.add("Wash dishes");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "Wash dishes");
    assert!(!snapshot[0].done);
    let id = snapshot[0].id;

    let snapshot = store.toggle(id);
    assert!(snapshot[0].done);

    let snapshot = store.delete(id);
    assert!(snapshot.is_empty());
}

#[test]
fn service_wraps_store_calls() {
    let mut service = TaskService::new(InMemoryTaskStore::new());

    service.add_task("  from service  ");
    assert_eq!(service.tasks().len(), 1);
    assert_eq!(service.tasks()[0].title, "from service");
    let id = service.tasks()[0].id;

    service.toggle_task(id);
    assert!(service.tasks()[0].done);

    service.delete_task(id);
    assert!(service.tasks().is_empty());
}

#[test]
fn service_passes_blank_input_through_as_noop() {
    let mut service = TaskService::new(InMemoryTaskStore::new());

    assert!(service.add_task("   ").is_empty());
    assert!(service.tasks().is_empty());
}
