use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use calorie_tracker_rs::app::{Action, AddOutcome, App};
use calorie_tracker_rs::interface::{Page, View};
use calorie_tracker_rs::models::{Calories, Item};
use calorie_tracker_rs::state::{FileStore, ItemStorage, KeyValueStore, ITEMS_KEY};

fn open_app(dir: &TempDir) -> App<FileStore, Page> {
    let storage = ItemStorage::new(FileStore::open(dir.path().join("storage.json")));
    let mut app = App::new(storage, Page::new()).unwrap();
    app.init("Calorie Tracker");
    app
}

fn add(app: &mut App<FileStore, Page>, name: &str, calories: &str) -> AddOutcome {
    app.view_mut().fill_form(name, calories);
    app.add().unwrap()
}

#[test]
fn test_full_session_scenario() {
    let dir = TempDir::new().unwrap();
    let mut app = open_app(&dir);
    assert!(!app.view().list_visible);

    match add(&mut app, "Apple", "100") {
        AddOutcome::Added(item) => assert_eq!(item.id, 0),
        other => panic!("unexpected outcome: {:?}", other),
    }
    match add(&mut app, "Bread", "200") {
        AddOutcome::Added(item) => assert_eq!(item.id, 1),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(app.store().total_calories(), Calories::new(300));
    assert_eq!(app.view().total_display, "300");
    assert!(app.view().list_visible);

    app.dispatch(Action::EditSelect("id-0".to_string())).unwrap();
    app.view_mut().fill_form("Apple", "150");
    app.dispatch(Action::Update).unwrap();
    assert_eq!(app.store().total_calories(), Calories::new(350));

    app.dispatch(Action::EditSelect("id-1".to_string())).unwrap();
    app.dispatch(Action::Delete).unwrap();
    assert_eq!(app.store().total_calories(), Calories::new(150));
    assert_eq!(
        app.storage().load().unwrap(),
        vec![Item::new(0, "Apple", Calories::new(150))]
    );

    app.dispatch(Action::ClearAll).unwrap();
    assert_eq!(app.store().total_calories(), Calories::new(0));
    assert!(app.store().is_empty());
    assert_eq!(app.storage().backend().get_item(ITEMS_KEY).unwrap(), None);
    assert_eq!(app.view().total_display, "0");
}

#[test]
fn test_items_survive_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = open_app(&dir);
        add(&mut app, "Apple", "100");
        add(&mut app, "Bread", "200");
        add(&mut app, "Cheese", "300");
        app.edit_select("id-1").unwrap();
        app.delete().unwrap();
    }

    let mut app = open_app(&dir);
    let keys: Vec<&str> = app.view().rows.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, vec!["id-0", "id-2"]);
    assert_eq!(app.view().total_display, "400");

    // Next id follows the largest surviving id
    match add(&mut app, "Dates", "50") {
        AddOutcome::Added(item) => assert_eq!(item.id, 3),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_duplicate_names_do_not_grow_collection() {
    let dir = TempDir::new().unwrap();
    let mut app = open_app(&dir);

    let names = ["Apple", "Bread", "apple", "Cheese", "BREAD", "Dates"];
    let mut accepted = 0;
    for name in names {
        if let AddOutcome::Added(item) = add(&mut app, name, "10") {
            assert_eq!(item.id, accepted);
            accepted += 1;
        }
    }

    assert_eq!(accepted, 4);
    assert_eq!(app.store().len(), 4);
    assert_eq!(app.storage().load().unwrap().len(), 4);
    assert_eq!(app.store().total_calories(), Calories::new(40));
}

#[test]
fn test_storage_file_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let mut app = open_app(&dir);
    add(&mut app, "Apple", "100");

    let content = fs::read_to_string(&path).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&content).unwrap();
    let items: serde_json::Value =
        serde_json::from_str(entries[ITEMS_KEY].as_str().unwrap()).unwrap();
    assert_eq!(
        items,
        serde_json::json!([{ "id": 0, "name": "Apple", "calories": 100 }])
    );

    app.clear_all().unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(entries.get(ITEMS_KEY).is_none());
}

#[test]
fn test_malformed_storage_fails_startup() {
    let dir = TempDir::new().unwrap();
    let mut backend = FileStore::open(dir.path().join("storage.json"));
    backend.set_item(ITEMS_KEY, "not an array").unwrap();

    let result = App::new(ItemStorage::new(backend), Page::new());
    assert!(result.is_err());
}
