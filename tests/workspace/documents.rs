use markpad::{MoveTarget, TreeError, ROOT_FOLDER};

use crate::support::{millis, Harness};

#[test]
fn create_document_files_under_first_folder_and_activates() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    harness.events.clear();

    let doc = workspace.create_document();
    assert_eq!(doc.version, 1);
    assert_eq!(doc.folder_id, ROOT_FOLDER);
    assert_eq!(workspace.active_id(), Some(doc.id.as_str()));
    assert!(workspace.tabs().contains(&doc.id));
    assert_eq!(workspace.tree().path_to(&doc.id), vec!["folder-1".to_string()]);
    assert_eq!(
        harness.events.names(),
        vec!["document-created", "document-switched", "documents-updated"]
    );
}

#[test]
fn create_file_is_not_activated() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let active = workspace.active_id().map(str::to_string);

    let doc = workspace.create_file(Some("folder-1"), Some("Ideas.md")).unwrap();
    assert_eq!(doc.title, "Ideas");
    assert_eq!(doc.folder_id, "folder-1");
    assert_eq!(workspace.tree().find(&doc.id).unwrap().name(), "Ideas.md");
    assert_eq!(workspace.active_id().map(str::to_string), active);
    assert!(!workspace.tabs().contains(&doc.id));

    let at_root = workspace.create_file(None, None).unwrap();
    assert_eq!(at_root.title, "New File");
    assert_eq!(at_root.folder_id, ROOT_FOLDER);
    assert!(workspace.tree().roots().iter().any(|node| node.id() == at_root.id));
}

#[test]
fn create_rejects_missing_or_non_folder_parents() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let file = workspace.documents()[0].id.clone();
    let count = workspace.documents().len();

    assert!(matches!(
        workspace.create_file(Some("nowhere"), None),
        Err(TreeError::NodeNotFound(id)) if id == "nowhere"
    ));
    assert!(matches!(
        workspace.create_folder(Some(file.as_str()), None),
        Err(TreeError::NotAFolder(id)) if id == file
    ));
    assert_eq!(workspace.documents().len(), count);
}

#[test]
fn folders_nest_and_hold_new_files() {
    let harness = Harness::new();
    let mut workspace = harness.open();

    let outer = workspace.create_folder(None, Some("Projects")).unwrap();
    let inner = workspace.create_folder(Some(outer.as_str()), None).unwrap();
    assert_ne!(outer, inner);
    assert!(inner.starts_with("folder-"));
    assert_eq!(workspace.tree().find(&inner).unwrap().name(), "New Folder");

    let doc = workspace.create_file(Some(inner.as_str()), Some("Plan")).unwrap();
    assert_eq!(workspace.tree().path_to(&doc.id), vec![outer, inner.clone()]);
    assert_eq!(workspace.document(&doc.id).unwrap().folder_id, inner);
}

#[test]
fn switching_writes_pending_content_for_the_document_left_behind() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let first = workspace.active_id().unwrap().to_string();
    let second = workspace.create_document().id;

    assert!(workspace.switch_to(&first));
    workspace.edit("draft", millis(0));
    assert!(workspace.switch_to(&second));

    assert_eq!(workspace.document(&first).unwrap().content, "draft");
    assert!(!workspace.switch_to("ghost"));
    assert_eq!(workspace.active_id(), Some(second.as_str()));
}

#[test]
fn closing_the_active_tab_switches_to_the_first() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let first = workspace.active_id().unwrap().to_string();
    let second = workspace.create_document().id;

    assert!(workspace.close_tab(&second));
    assert_eq!(workspace.active_id(), Some(first.as_str()));
    assert!(workspace.document(&second).is_some());
    assert!(!workspace.close_tab(&second));
}

#[test]
fn closing_the_last_tab_leaves_the_document_active() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let only = workspace.active_id().unwrap().to_string();

    assert!(workspace.close_tab(&only));
    assert!(workspace.tabs().is_empty());
    assert_eq!(workspace.active_id(), Some(only.as_str()));
}

#[test]
fn deleting_the_active_document_falls_back_to_first_tab() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let first = workspace.active_id().unwrap().to_string();
    let second = workspace.create_document().id;
    harness.events.clear();

    let removed = workspace.delete_document(&second).unwrap();
    assert_eq!(removed.id, second);
    assert_eq!(workspace.active_id(), Some(first.as_str()));
    assert!(!workspace.tabs().contains(&second));
    let names = harness.events.names();
    assert_eq!(&names[..2], ["document-deleted", "documents-updated"]);
    assert!(names.contains(&"document-switched"));
}

#[test]
fn deleting_without_tabs_falls_back_to_first_document() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let first = workspace.active_id().unwrap().to_string();
    let second = workspace.create_document().id;
    workspace.close_tab(&first);

    assert!(workspace.delete_document(&second).is_some());
    assert_eq!(workspace.active_id(), Some(first.as_str()));
    assert!(workspace.tabs().contains(&first));
}

#[test]
fn deleting_the_last_document_creates_a_new_one() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let only = workspace.active_id().unwrap().to_string();

    workspace.delete_document(&only).unwrap();
    assert_eq!(workspace.documents().len(), 1);
    let replacement = workspace.active_id().unwrap();
    assert_ne!(replacement, only);
    assert!(workspace.delete_document("ghost").is_none());
}

#[test]
fn deleting_a_background_document_keeps_the_active_one() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let first = workspace.active_id().unwrap().to_string();
    let second = workspace.create_document().id;

    workspace.delete_document(&first).unwrap();
    assert_eq!(workspace.active_id(), Some(second.as_str()));
}

#[test]
fn deleting_a_file_node_deletes_its_document() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let doc = workspace.create_file(Some("folder-1"), Some("Scratch")).unwrap();

    assert!(workspace.delete_node(&doc.id));
    assert!(!workspace.tree().contains(&doc.id));
    assert!(workspace.document(&doc.id).is_none());
    assert!(!workspace.delete_node(&doc.id));
}

#[test]
fn deleting_a_folder_leaves_its_documents() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let folder = workspace.create_folder(None, Some("Archive")).unwrap();
    let doc = workspace.create_file(Some(folder.as_str()), None).unwrap();

    assert!(workspace.delete_node(&folder));
    assert!(!workspace.tree().contains(&doc.id));
    assert!(workspace.document(&doc.id).is_some());
}

#[test]
fn rename_document_syncs_tab_and_tree() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let id = workspace.active_id().unwrap().to_string();
    harness.events.clear();

    assert!(workspace.rename_document(&id, "  Meeting notes "));
    assert_eq!(workspace.document(&id).unwrap().title, "Meeting notes");
    assert_eq!(workspace.tabs().tabs()[0].title, "Meeting notes");
    assert_eq!(workspace.tree().find(&id).unwrap().name(), "Meeting notes.md");
    assert_eq!(
        harness.events.names(),
        vec!["document-title-changed", "file-system-updated"]
    );

    let updated_at = workspace.document(&id).unwrap().updated_at;
    assert!(workspace.rename_document(&id, "Meeting notes"));
    assert_eq!(workspace.document(&id).unwrap().updated_at, updated_at);

    assert!(!workspace.rename_document(&id, "   "));
    assert!(!workspace.rename_document("ghost", "Title"));
    assert_eq!(workspace.document(&id).unwrap().title, "Meeting notes");
}

#[test]
fn rename_node_carries_name_to_document() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let id = workspace.active_id().unwrap().to_string();

    assert!(workspace.rename_node(&id, "Journal.md"));
    assert_eq!(workspace.document(&id).unwrap().title, "Journal");
    assert_eq!(workspace.tree().find(&id).unwrap().name(), "Journal.md");
    assert_eq!(workspace.tabs().tabs()[0].title, "Journal");

    assert!(workspace.rename_node("folder-1", "Notebook"));
    assert_eq!(workspace.tree().find("folder-1").unwrap().name(), "Notebook");
    assert!(!workspace.rename_node("ghost", "Nothing"));
    assert!(!workspace.rename_node(&id, ""));
}

#[test]
fn moving_a_file_updates_its_folder_id() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let id = workspace.active_id().unwrap().to_string();
    let folder = workspace.create_folder(None, Some("Later")).unwrap();

    workspace
        .move_node(&id, MoveTarget::Inside(folder.clone()))
        .unwrap();
    assert_eq!(workspace.document(&id).unwrap().folder_id, folder);

    workspace.move_node(&id, MoveTarget::Root).unwrap();
    assert_eq!(workspace.document(&id).unwrap().folder_id, ROOT_FOLDER);

    workspace
        .move_node(&id, MoveTarget::Before("folder-1".into()))
        .unwrap();
    assert_eq!(workspace.tree().roots()[0].id(), id);
}

#[test]
fn moves_into_a_descendant_are_rejected() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let outer = workspace.create_folder(None, None).unwrap();
    let inner = workspace.create_folder(Some(outer.as_str()), None).unwrap();
    let before = workspace.tree().clone();

    assert!(matches!(
        workspace.move_node(&outer, MoveTarget::Inside(inner.clone())),
        Err(TreeError::WouldCycle { .. })
    ));
    assert!(matches!(
        workspace.move_node("ghost", MoveTarget::Root),
        Err(TreeError::NodeNotFound(_))
    ));
    assert_eq!(workspace.tree(), &before);
}

#[test]
fn renaming_a_plain_file_node_keeps_its_extension() {
    use markpad::storage::keys::FILE_SYSTEM;
    use markpad::{FileTree, TypedStorage};

    let harness = Harness::new();
    let id = harness.open().active_id().unwrap().to_string();
    let tree: FileTree = serde_json::from_value(serde_json::json!([
        {"id": "folder-1", "name": "My Documents", "type": "folder", "children": [
            {"id": "n1", "name": "notes.txt", "type": "file", "documentRef": id}
        ]}
    ]))
    .unwrap();
    harness.storage.save(&FILE_SYSTEM, &tree).unwrap();

    let mut workspace = harness.open();
    assert!(workspace.rename_node("n1", "renamed.txt"));
    assert_eq!(workspace.tree().find("n1").unwrap().name(), "renamed.txt");
    assert_eq!(workspace.document(&id).unwrap().title, "renamed.txt");
    assert_eq!(workspace.tabs().tabs()[0].title, "renamed.txt");
}
