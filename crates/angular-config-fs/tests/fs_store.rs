// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use angular_app_core::config::{ConfigError, ConfigService, ConfigStore};
use angular_app_core::prefs::{EvalPrefs, PrefsPort, PREFS_KEY};
use angular_config_fs::FsConfigStore;

#[test]
fn missing_key_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path()).unwrap();
    assert!(matches!(store.load_raw("nope"), Err(ConfigError::NotFound)));
    store.remove_raw("nope").unwrap();
}

#[test]
fn blobs_land_in_key_named_json_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::with_base(dir.path().join("nested")).unwrap();
    store.save_raw("thing", b"{}").unwrap();

    let path = dir.path().join("nested").join("thing.json");
    assert_eq!(store.path_for("thing"), path);
    assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    assert_eq!(store.load_raw("thing").unwrap(), b"{}");

    store.remove_raw("thing").unwrap();
    assert!(!path.exists());
}

#[test]
fn prefs_survive_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let mut prefs = EvalPrefs::default();
    prefs.set("precision", "3").unwrap();

    ConfigService::new(FsConfigStore::with_base(dir.path()).unwrap())
        .save_prefs(&prefs)
        .unwrap();

    let reopened = ConfigService::new(FsConfigStore::with_base(dir.path()).unwrap());
    assert_eq!(reopened.load_prefs().unwrap(), prefs);
    assert!(dir.path().join(format!("{PREFS_KEY}.json")).is_file());
}
