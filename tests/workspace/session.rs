use std::sync::Arc;

use markpad::storage::keys::{DOCUMENTS, DOCUMENT_TABS, FILE_SYSTEM, LAST_ACTIVE_DOCUMENT};
use markpad::{
    DocumentTab, FileStorage, InMemoryStorage, Storage, SystemClock, TypedStorage, Workspace,
    WorkspaceConfig,
};

use crate::support::{init_tracing, start, Harness};

#[test]
fn first_open_seeds_document_tree_and_tab() {
    let harness = Harness::new();
    let workspace = harness.open();

    assert_eq!(workspace.documents().len(), 1);
    let doc = &workspace.documents()[0];
    assert_eq!(doc.title, "New Document");
    assert_eq!(workspace.active_id(), Some(doc.id.as_str()));
    assert_eq!(workspace.tabs().len(), 1);

    let folder = workspace.tree().find("folder-1").unwrap();
    assert_eq!(folder.name(), "My Documents");
    assert_eq!(folder.children()[0].document_ref(), Some(doc.id.as_str()));
    assert_eq!(folder.children()[0].name(), "New Document.md");

    assert!(harness.storage.load(&FILE_SYSTEM).unwrap().is_some());
    assert_eq!(
        harness.storage.load_raw(LAST_ACTIVE_DOCUMENT).as_deref(),
        Some(doc.id.as_str())
    );
}

#[test]
fn reopen_restores_active_document_and_tabs() {
    let harness = Harness::new();
    let (second, tabs) = {
        let mut workspace = harness.open();
        workspace.create_document();
        let second = workspace.create_document().id;
        (second, workspace.tabs().clone())
    };

    let workspace = harness.open();
    assert_eq!(workspace.active_id(), Some(second.as_str()));
    assert_eq!(workspace.tabs(), &tabs);
    assert_eq!(workspace.documents().len(), 3);
}

#[test]
fn stale_tabs_and_active_id_are_dropped() {
    let harness = Harness::new();
    let first = harness.open().documents()[0].id.clone();

    harness
        .storage
        .save(
            &DOCUMENT_TABS,
            &vec![DocumentTab::new("ghost", "Ghost"), DocumentTab::new(&first, "First")],
        )
        .unwrap();
    harness.storage.save_raw(LAST_ACTIVE_DOCUMENT, "ghost");

    let workspace = harness.open();
    assert_eq!(workspace.tabs().len(), 1);
    assert!(workspace.tabs().contains(&first));
    assert_eq!(workspace.active_id(), Some(first.as_str()));
}

#[test]
fn malformed_keys_fall_back_to_defaults() {
    let harness = Harness::new();
    harness.storage.corrupt("documents", "{{{");
    harness.storage.corrupt("txtwFileSystem", "not a tree");
    harness.storage.corrupt("documentTabs", "[1, 2");

    let workspace = harness.open();
    assert_eq!(workspace.documents().len(), 1);
    assert!(workspace.tree().contains("folder-1"));
    assert_eq!(workspace.tabs().len(), 1);
    assert!(harness.storage.load(&DOCUMENTS).is_ok());
    assert!(harness.storage.load(&FILE_SYSTEM).is_ok());
}

#[test]
fn missing_tree_entries_are_healed_on_open() {
    let harness = Harness::new();
    let id = {
        let mut workspace = harness.open();
        workspace.create_document().id
    };
    harness
        .storage
        .save(&FILE_SYSTEM, &markpad::FileTree::default())
        .unwrap();

    let workspace = harness.open();
    assert!(workspace.tree().contains(&id));
    assert_eq!(workspace.tree().roots().len(), 2);
}

#[test]
fn write_failures_keep_the_session_running() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    harness.storage.fail_writes(true);

    let doc = workspace.create_document();
    assert!(workspace.document(&doc.id).is_some());
    assert!(workspace.rename_document(&doc.id, "Offline"));
    assert_eq!(workspace.document(&doc.id).unwrap().title, "Offline");

    harness.storage.fail_writes(false);
    workspace.reload();
    assert!(workspace.document(&doc.id).is_none());
}

#[test]
fn file_storage_persists_across_sessions() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let id = {
        let storage = Arc::new(FileStorage::new(&path));
        let mut workspace =
            Workspace::open(storage, WorkspaceConfig::default(), Arc::new(SystemClock));
        let id = workspace.create_document().id;
        workspace.rename_document(&id, "On disk");
        id
    };

    let storage = Arc::new(FileStorage::new(&path));
    assert!(storage.keys().unwrap().contains(&"documents".to_string()));
    let workspace = Workspace::open(storage, WorkspaceConfig::default(), Arc::new(SystemClock));
    assert_eq!(workspace.document(&id).unwrap().title, "On disk");
    assert_eq!(workspace.active_id(), Some(id.as_str()));
}

#[test]
fn empty_document_list_opens_without_active_document() {
    let harness = Harness::new();
    harness.storage.save(&DOCUMENTS, &Vec::new()).unwrap();
    let mut workspace = harness.open();
    assert!(workspace.active_id().is_none());
    assert!(!workspace.edit("text", start()));
    assert!(workspace.save_version().is_none());

    let doc = workspace.create_document();
    assert_eq!(workspace.active_id(), Some(doc.id.as_str()));
}

#[test]
fn shared_storage_sessions_see_each_others_writes_on_reload() {
    let storage = Arc::new(InMemoryStorage::new());
    init_tracing();
    let mut left = Workspace::open(
        storage.clone(),
        WorkspaceConfig::default(),
        Arc::new(SystemClock),
    );
    let mut right = Workspace::open(storage, WorkspaceConfig::default(), Arc::new(SystemClock));

    let doc = left.create_document();
    assert!(right.document(&doc.id).is_none());
    right.reload();
    assert!(right.document(&doc.id).is_some());
}

#[test]
fn records_missing_timestamps_still_load() {
    let harness = Harness::new();
    harness.storage.corrupt(
        "documents",
        r#"[
            {"id": "d1", "title": "Complete", "content": "a",
             "created_at": "2024-03-01T10:00:00.000Z",
             "updated_at": "2024-03-01T10:00:00.000Z",
             "last_synced_at": "2024-03-01T10:00:00.000Z"},
            {"id": "d2", "title": "Older", "content": "b",
             "created_at": "2024-03-01T10:00:00.000Z",
             "updated_at": "2024-03-01T10:00:00.000Z"}
        ]"#,
    );

    let workspace = harness.open();
    assert_eq!(workspace.registry().ids(), vec!["d1", "d2"]);
    assert_eq!(workspace.document("d2").unwrap().title, "Older");

    let stored = harness.storage.load(&DOCUMENTS).unwrap().unwrap();
    assert!(stored.iter().any(|doc| doc.id == "d1"));
}

#[test]
fn active_document_outside_stored_tabs_gets_no_tab_on_open() {
    let harness = Harness::new();
    let (first, second) = {
        let mut workspace = harness.open();
        let first = workspace.active_id().unwrap().to_string();
        (first, workspace.create_document().id)
    };
    harness
        .storage
        .save(&DOCUMENT_TABS, &vec![DocumentTab::new(&first, "First")])
        .unwrap();

    let workspace = harness.open();
    assert_eq!(workspace.active_id(), Some(second.as_str()));
    assert_eq!(workspace.tabs().len(), 1);
    assert!(!workspace.tabs().contains(&second));
}
