//! Value-form calls return exact zero values and never fail

use std::collections::HashMap;

use cmdreplay::{
    CommandKey, Decoded, Expected, MemoryBlobStore, Reconstructor, ReplayConfig, TaggedSequence,
    TypeTag, Value, CONFIG_FILE_NAME,
};
use tempfile::TempDir;

fn corrupt_store() -> (MemoryBlobStore, CommandKey) {
    let store = MemoryBlobStore::new();
    let key = CommandKey::new("CORRUPT", ["blob"]);
    // Count claims i32::MAX elements
    store.insert(key.clone(), vec![0xFF, 0xFF, 0xFF, 0x7F, 1, 0, 0, 0, b'x']);
    (store, key)
}

#[test]
fn corrupt_blob_yields_zero_values() {
    let (store, key) = corrupt_store();
    let r = Reconstructor::new(store);

    assert!(r.string_slice_result(&key).is_err());
    assert!(r.string_slice_value(&key).is_empty());
    assert_eq!(r.string_map_value(&key), HashMap::new());
    assert_eq!(r.slice_value(&key), TaggedSequence::default());
    assert_eq!(r.int_value(&key), 0);
    assert_eq!(r.float_value(&key), 0.0);
}

#[test]
fn missing_blob_yields_zero_values() {
    let r = Reconstructor::new(MemoryBlobStore::new());
    let key = CommandKey::new("GET", ["absent"]);

    assert_eq!(r.string_value(&key), "");
    assert_eq!(r.value::<u8>(&key), 0);
    assert!(!r.value::<bool>(&key));
    assert_eq!(
        r.value_expected(&key, Expected::Scalar(TypeTag::Uintptr)),
        Decoded::Scalar(Value::Uintptr(0))
    );
}

#[test]
fn config_file_drives_reconstructor() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    ReplayConfig::write_default_if_missing(&path).unwrap();

    let config = ReplayConfig::load_or_default(&path).unwrap();
    let (store, key) = corrupt_store();
    let r = Reconstructor::with_config(store, &config).unwrap();
    assert!(r.string_slice_value(&key).is_empty());
}
