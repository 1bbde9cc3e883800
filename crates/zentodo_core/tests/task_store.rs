use zentodo_core::{
    decode_tasks, encode_tasks, MemorySlot, SlotResult, StorageSlot, Task, TaskStore,
};

fn mirror(slot: &MemorySlot) -> Vec<Task> {
    let payload = slot
        .read()
        .unwrap()
        .expect("slot should hold a payload after a mutation");
    decode_tasks(&payload).unwrap()
}

#[test]
fn open_with_absent_slot_starts_empty() {
    let store = TaskStore::open(MemorySlot::new());

    assert!(store.tasks().is_empty());
    assert_eq!(store.progress().total, 0);
}

#[test]
fn open_with_malformed_payload_degrades_to_empty() {
    let store = TaskStore::open(MemorySlot::with_payload("{not json"));
    assert!(store.tasks().is_empty());
}

#[test]
fn open_with_unparseable_timestamp_degrades_to_empty() {
    let payload = r#"[{"id":"11111111-2222-4333-8444-555555555555","text":"old","completed":false,"createdAt":"yesterday"}]"#;
    let store = TaskStore::open(MemorySlot::with_payload(payload));
    assert!(store.tasks().is_empty());
}

#[test]
fn add_increases_total_by_one_and_trims_text() {
    let mut store = TaskStore::open(MemorySlot::new());

    let tasks = store.add("  Buy milk  ");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Buy milk");
    assert!(!tasks[0].completed);

    let progress = store.progress();
    assert_eq!(progress.total, 1);
    assert_eq!(progress.completed, 0);
}

#[test]
fn add_with_empty_text_leaves_the_list_unchanged() {
    let slot = MemorySlot::new();
    let mut store = TaskStore::open(&slot);

    store.add("");
    store.add("   ");

    assert!(store.tasks().is_empty());
    // A no-op must not sync the mirror either.
    assert_eq!(slot.read().unwrap(), None);
}

#[test]
fn add_prepends_newest_first() {
    let mut store = TaskStore::open(MemorySlot::new());

    store.add("A");
    let tasks = store.add("B");

    assert_eq!(tasks[0].text, "B");
    assert_eq!(tasks[1].text, "A");
}

#[test]
fn duplicate_text_is_allowed() {
    let mut store = TaskStore::open(MemorySlot::new());

    store.add("same");
    store.add("same");

    assert_eq!(store.tasks().len(), 2);
    assert_ne!(store.tasks()[0].id, store.tasks()[1].id);
}

#[test]
fn toggle_flips_exactly_one_task() {
    let mut store = TaskStore::open(MemorySlot::new());
    store.add("A");
    store.add("B");

    let id_a = store.tasks()[1].id;
    let before: Vec<Task> = store.tasks().to_vec();

    assert!(store.toggle(id_a));

    let after = store.tasks();
    assert_eq!(after[0], before[0]);
    assert!(after[1].completed);
    assert_eq!(after[1].id, before[1].id);
    assert_eq!(after[1].text, before[1].text);
    assert_eq!(after[1].created_at, before[1].created_at);
}

#[test]
fn toggle_with_unknown_id_is_a_noop() {
    let mut store = TaskStore::open(MemorySlot::new());
    store.add("A");
    let before: Vec<Task> = store.tasks().to_vec();

    assert!(!store.toggle(uuid::Uuid::new_v4()));
    assert_eq!(store.tasks(), before);
}

#[test]
fn delete_removes_exactly_one_task() {
    let mut store = TaskStore::open(MemorySlot::new());
    store.add("A");
    store.add("B");

    let id_a = store.tasks()[1].id;
    assert!(store.delete(id_a));

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].text, "B");
}

#[test]
fn delete_with_unknown_id_is_a_noop() {
    let mut store = TaskStore::open(MemorySlot::new());
    store.add("A");

    assert!(!store.delete(uuid::Uuid::new_v4()));
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn progress_ratio_is_zero_for_an_empty_list() {
    let store = TaskStore::open(MemorySlot::new());
    assert_eq!(store.progress().ratio(), 0.0);
}

#[test]
fn progress_ratio_tracks_completion() {
    let mut store = TaskStore::open(MemorySlot::new());
    store.add("A");
    store.add("B");

    let id_a = store.tasks()[1].id;
    store.toggle(id_a);

    let progress = store.progress();
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.total, 2);
    assert_eq!(progress.ratio(), 0.5);
}

#[test]
fn mirror_matches_after_every_mutation() {
    let slot = MemorySlot::new();
    let mut store = TaskStore::open(&slot);

    store.add("A");
    assert_eq!(mirror(&slot), store.tasks());

    store.add("B");
    assert_eq!(mirror(&slot), store.tasks());

    let id_a = store.tasks()[1].id;
    store.toggle(id_a);
    assert_eq!(mirror(&slot), store.tasks());

    store.delete(id_a);
    assert_eq!(mirror(&slot), store.tasks());
}

#[test]
fn encode_then_decode_reproduces_the_list() {
    let mut store = TaskStore::open(MemorySlot::new());
    store.add("first");
    store.add("second");
    let id = store.tasks()[0].id;
    store.toggle(id);

    let payload = encode_tasks(store.tasks()).unwrap();
    let decoded = decode_tasks(&payload).unwrap();

    assert_eq!(decoded, store.tasks());
    for (decoded_task, original) in decoded.iter().zip(store.tasks()) {
        assert_eq!(
            decoded_task.created_at.timestamp(),
            original.created_at.timestamp()
        );
    }
}

#[test]
fn a_second_session_over_the_same_slot_sees_the_same_list() {
    let slot = MemorySlot::new();
    {
        let mut store = TaskStore::open(&slot);
        store.add("carried over");
    }

    let store = TaskStore::open(&slot);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].text, "carried over");
}

struct SealedSlot;

impl StorageSlot for SealedSlot {
    fn read(&self) -> SlotResult<Option<String>> {
        Ok(None)
    }

    fn write(&self, _payload: &str) -> SlotResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "slot sealed").into())
    }
}

#[test]
fn write_failure_keeps_the_in_memory_list_authoritative() {
    let mut store = TaskStore::open(SealedSlot);

    store.add("survives the failed write");

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.progress().total, 1);
}
