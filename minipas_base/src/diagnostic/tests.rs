use super::{Handler, Storage};

#[test]
fn storage_keeps_receiving_order() {
    let storage: Storage<String> = Storage::new();
    assert!(storage.is_empty());

    storage.receive("second");
    storage.receive("first");
    storage.receive("first");

    assert_eq!(storage.len(), 3);
    assert_eq!(storage.as_vec()[0], "second");
    assert_eq!(storage.into_vec(), vec!["second", "first", "first"]);
}
