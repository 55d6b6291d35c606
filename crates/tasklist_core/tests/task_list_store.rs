use tasklist_core::{Task, TaskId, TaskListStore};

fn texts(store: &TaskListStore) -> Vec<String> {
    store
        .list()
        .into_iter()
        .map(|entry| entry.task.text().to_string())
        .collect()
}

fn add(store: &mut TaskListStore, text: &str) -> TaskId {
    store.add(text).expect("non-empty text should be accepted").id()
}

#[test]
fn new_store_is_empty() {
    let store = TaskListStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.list().is_empty());
    assert_eq!(store.draft(), "");
}

#[test]
fn add_appends_one_task_with_untrimmed_text() {
    let mut store = TaskListStore::new();

    let task = store.add("  Buy milk ").unwrap();

    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].task, task);
    assert_eq!(list[0].task.text(), "  Buy milk ");
    assert!(!list[0].selected);
}

#[test]
fn add_rejects_empty_and_whitespace_only_text() {
    let mut store = TaskListStore::new();
    add(&mut store, "keep");
    let before = store.list();

    for blank in ["", "   ", "\t\n", " \r\n "] {
        assert!(store.add(blank).is_none(), "{blank:?} should be rejected");
    }

    assert_eq!(store.list(), before);
}

#[test]
fn toggle_twice_restores_selection() {
    let mut store = TaskListStore::new();
    let id = add(&mut store, "walk dog");

    assert!(!store.is_selected(id));
    store.toggle(id);
    assert!(store.is_selected(id));
    assert_eq!(store.selected_count(), 1);
    store.toggle(id);
    assert!(!store.is_selected(id));
    assert_eq!(store.selected_count(), 0);
}

#[test]
fn toggle_unknown_id_is_rejected() {
    let mut store = TaskListStore::new();
    add(&mut store, "real");
    let stranger = Task::new("never added").id();

    store.toggle(stranger);

    assert!(!store.is_selected(stranger));
    assert_eq!(store.selected_count(), 0);
}

#[test]
fn toggle_after_delete_does_not_resurrect_selection() {
    let mut store = TaskListStore::new();
    let id = add(&mut store, "gone soon");
    store.delete(id);

    store.toggle(id);

    assert!(!store.is_selected(id));
    assert_eq!(store.selected_count(), 0);
}

#[test]
fn delete_removes_task_and_its_selection() {
    let mut store = TaskListStore::new();
    let keep = add(&mut store, "keep");
    let doomed = add(&mut store, "doomed");
    store.toggle(keep);
    store.toggle(doomed);

    store.delete(doomed);

    assert_eq!(store.len(), 1);
    assert!(store.get(doomed).is_none());
    assert!(!store.is_selected(doomed));
    assert!(store.is_selected(keep));
}

#[test]
fn delete_unknown_id_changes_nothing() {
    let mut store = TaskListStore::new();
    let id = add(&mut store, "a");
    store.toggle(id);
    let before = store.list();

    store.delete(Task::new("other").id());

    assert_eq!(store.list(), before);
    assert_eq!(store.selected_count(), 1);
}

#[test]
fn surviving_tasks_keep_insertion_order() {
    let mut store = TaskListStore::new();
    let ids: Vec<TaskId> = ["1", "2", "3", "4", "5"]
        .into_iter()
        .map(|text| add(&mut store, text))
        .collect();

    store.delete(ids[3]);
    store.delete(ids[0]);
    add(&mut store, "6");

    assert_eq!(texts(&store), vec!["2", "3", "5", "6"]);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut store = TaskListStore::new();
    let first = add(&mut store, "same");
    store.delete(first);
    let second = add(&mut store, "same");

    assert_ne!(first, second);
}

#[test]
fn list_is_a_detached_snapshot() {
    let mut store = TaskListStore::new();
    let id = add(&mut store, "original");

    let mut snapshot = store.list();
    snapshot[0].selected = true;
    snapshot.clear();

    assert_eq!(store.len(), 1);
    assert!(!store.is_selected(id));
}

#[test]
fn id_at_maps_display_rows() {
    let mut store = TaskListStore::new();
    let a = add(&mut store, "A");
    let b = add(&mut store, "B");

    assert_eq!(store.id_at(0), Some(a));
    assert_eq!(store.id_at(1), Some(b));
    assert_eq!(store.id_at(2), None);
}

#[test]
fn buy_milk_scenario() {
    let mut store = TaskListStore::new();

    let id = add(&mut store, "Buy milk");
    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].task.text(), "Buy milk");
    assert!(!list[0].selected);

    store.toggle(id);
    let list = store.list();
    assert_eq!(list[0].task.text(), "Buy milk");
    assert!(list[0].selected);

    assert!(store.add("  ").is_none());
    assert_eq!(store.len(), 1);

    store.delete(id);
    assert!(store.list().is_empty());
}

#[test]
fn delete_middle_scenario() {
    let mut store = TaskListStore::new();
    add(&mut store, "A");
    let b = add(&mut store, "B");
    add(&mut store, "C");
    assert_eq!(texts(&store), vec!["A", "B", "C"]);

    store.delete(b);

    assert_eq!(texts(&store), vec!["A", "C"]);
}

#[test]
fn submit_draft_adds_and_clears_buffer() {
    let mut store = TaskListStore::new();
    store.set_draft("Call mom");

    let task = store.submit_draft().expect("draft should be accepted");

    assert_eq!(task.text(), "Call mom");
    assert_eq!(store.draft(), "");
    assert_eq!(store.len(), 1);
}

#[test]
fn submit_blank_draft_keeps_buffer() {
    let mut store = TaskListStore::new();
    store.set_draft("   ");

    assert!(store.submit_draft().is_none());
    assert_eq!(store.draft(), "   ");
    assert!(store.is_empty());
}

#[test]
fn direct_add_also_clears_pending_draft() {
    let mut store = TaskListStore::new();
    store.set_draft("half typed");

    store.add("typed elsewhere").unwrap();

    assert_eq!(store.draft(), "");
}
