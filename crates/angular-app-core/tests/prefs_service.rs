// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use angular_app_core::config::{ConfigError, ConfigService, ConfigStore};
use angular_app_core::prefs::{EvalPrefs, PrefsPort, PREFS_KEY};
use angular_core::math::AngleUnit;

#[derive(Default)]
struct MemStore {
    blobs: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl ConfigStore for MemStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        self.blobs
            .borrow()
            .get(key)
            .cloned()
            .ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), ConfigError> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}

#[test]
fn missing_prefs_load_as_defaults() {
    let service = ConfigService::new(MemStore::default());
    assert_eq!(service.load_prefs().unwrap(), EvalPrefs::default());
    assert!(service.load::<EvalPrefs>(PREFS_KEY).unwrap().is_none());
}

#[test]
fn prefs_persist_under_their_key() {
    let service = ConfigService::new(MemStore::default());
    let mut prefs = EvalPrefs::default();
    prefs.set("precision", "2").unwrap();
    prefs.set("angle_unit", "radians").unwrap();
    service.save_prefs(&prefs).unwrap();

    assert_eq!(service.load_prefs().unwrap(), prefs);

    let raw = service.store().load_raw(PREFS_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(json["angle_unit"], "radians");
    assert_eq!(json["precision"], 2);
}

#[test]
fn reset_restores_defaults() {
    let service = ConfigService::new(MemStore::default());
    let prefs = EvalPrefs {
        precision: 1,
        angle_unit: AngleUnit::Radians,
        log_filter: "debug".into(),
    };
    service.save_prefs(&prefs).unwrap();
    service.reset_prefs().unwrap();
    assert_eq!(service.load_prefs().unwrap(), EvalPrefs::default());
}
