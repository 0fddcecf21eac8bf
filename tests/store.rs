use std::fs;

use palette_store::{DirContext, PaletteColor, PaletteRecord, RecordStore, StoreError};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Copy the fixtures so tests can write without touching them
fn fixture_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for entry in fs::read_dir("./tests/test_cases").unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
    }
    dir
}

#[test]
fn check_fixture_catalog() {
    init_logging();
    let mut store = RecordStore::new(DirContext::new("./tests/test_cases"));

    assert_eq!(
        store.record_names(),
        &["Ocean", "Forest", "Desert", "Broken", "Sunset"]
    );

    let report = store.load_next(2);
    assert_eq!(report.loaded, vec!["Ocean", "Forest"]);
    assert_eq!(store.loaded_count(), 2);

    // Desert has no file and Broken does not parse; both are skipped over
    let report = store.load_next(10);
    assert_eq!(report.loaded, vec!["Sunset"]);
    let failed: Vec<&str> = report.failed.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(failed, vec!["Desert", "Broken"]);
    assert!(matches!(report.failed[0].1, StoreError::RecordNotFound(_)));
    assert!(matches!(report.failed[1].1, StoreError::RecordRead { .. }));
    assert_eq!(store.loaded_count(), 5);
    assert!(store.is_fully_loaded());

    let names: Vec<&str> = store.loaded().map(|record| record.name()).collect();
    assert_eq!(names, vec!["Ocean", "Forest", "Sunset"]);
    assert_eq!(store.get("Sunset").unwrap().len(), 4);
    assert_eq!(
        store.get("Forest").unwrap().colors()[1],
        PaletteColor::from_rgb(0x556b2f)
    );
}

#[test]
fn check_missing_directory() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(DirContext::new(dir.path().join("nothing here")));

    assert!(store.is_empty());
    assert!(matches!(
        store.index_error(),
        Some(StoreError::IndexUnavailable { .. })
    ));
}

#[test]
fn check_save_and_reload_on_disk() {
    init_logging();
    let dir = fixture_dir();

    {
        let mut store = RecordStore::new(DirContext::new(dir.path()));
        store.load_by_name("Ocean").unwrap();
        store.save_by_name("Ocean").unwrap();

        let mut desert = PaletteRecord::new("Desert").unwrap();
        desert.push(PaletteColor::from_rgb(0xedc9af));
        desert.push(PaletteColor::from_rgb(0xc19a6b));
        store.save(&desert).unwrap();

        let forest = store.load_by_name("Forest").unwrap().clone();
        store.save_as(&forest, "Forest Backup").unwrap();
        assert_eq!(store.len(), 5);
    }

    assert_eq!(
        fs::read_to_string(dir.path().join("Ocean.txt")).unwrap(),
        fs::read_to_string("./tests/test_cases/Ocean.txt").unwrap()
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("RecordsIndex.txt")).unwrap(),
        fs::read_to_string("./tests/test_cases/RecordsIndex.txt").unwrap()
    );

    let mut store = RecordStore::new(DirContext::new(dir.path()));
    let desert = store.load_by_name("Desert").unwrap();
    assert_eq!(desert.colors()[0], PaletteColor::from_rgb(0xedc9af));

    // The backup file exists but the index never learned about it
    assert!(dir.path().join("Forest Backup.txt").is_file());
    assert!(matches!(
        store.load_by_name("Forest Backup"),
        Err(StoreError::UnknownRecord(_))
    ));
}

#[test]
fn check_create_on_disk() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let context = DirContext::create(dir.path().join("palettes")).unwrap();
    let mut store = RecordStore::with_index(context.clone(), "Mine");

    store
        .create(
            PaletteRecord::with_colors("Night", vec![PaletteColor::new(0x19, 0x19, 0x70)]).unwrap(),
        )
        .unwrap();
    store.register_name("Later").unwrap();

    assert_eq!(
        fs::read_to_string(context.root().join("Mine.txt")).unwrap(),
        "Night\nLater\n"
    );

    let mut reopened = RecordStore::with_index(context, "Mine");
    let report = reopened.load_next(2);
    assert_eq!(report.loaded, vec!["Night"]);
    assert_eq!(reopened.failed_names(), &["Later"]);
    assert_eq!(reopened.color_name("#191970").unwrap(), "Midnight Blue");
}
