// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Evaluation preferences shared by angular tools.

use angular_core::math::AngleUnit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Config key the preferences are stored under.
pub const PREFS_KEY: &str = "eval_prefs";

/// Largest accepted `precision`; beyond this `f64` has no more digits to show.
pub const MAX_PRECISION: usize = 17;

/// Saved preferences for evaluating and printing angles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalPrefs {
    /// Digits after the decimal point when printing results.
    pub precision: usize,
    /// Unit angle inputs are read in and results printed in.
    pub angle_unit: AngleUnit,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for EvalPrefs {
    fn default() -> Self {
        Self {
            precision: 6,
            angle_unit: AngleUnit::Degrees,
            log_filter: "warn".to_owned(),
        }
    }
}

/// Errors raised when editing preferences by key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrefsError {
    /// No preference has this key.
    #[error("unknown preference `{0}` (expected one of: {keys})", keys = EvalPrefs::KEYS.join(", "))]
    UnknownKey(String),
    /// The value could not be parsed for this key.
    #[error("invalid value `{value}` for `{key}`: {reason}")]
    InvalidValue {
        /// Preference key.
        key: &'static str,
        /// Offending value.
        value: String,
        /// Parse failure.
        reason: String,
    },
}

impl EvalPrefs {
    /// Keys accepted by [`EvalPrefs::set`].
    pub const KEYS: &'static [&'static str] = &["precision", "angle_unit", "log_filter"];

    /// Sets one preference from its textual form.
    ///
    /// # Errors
    /// Returns [`PrefsError`] for unknown keys and unparsable values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        match key {
            "precision" => {
                let precision = value
                    .parse::<usize>()
                    .map_err(|e| invalid("precision", value, e))?;
                if precision > MAX_PRECISION {
                    return Err(invalid(
                        "precision",
                        value,
                        format_args!("must be at most {MAX_PRECISION}"),
                    ));
                }
                self.precision = precision;
            }
            "angle_unit" | "unit" => {
                self.angle_unit = value
                    .parse::<AngleUnit>()
                    .map_err(|e| invalid("angle_unit", value, e))?;
            }
            "log_filter" => {
                let filter = value.trim();
                if filter.is_empty() {
                    return Err(invalid("log_filter", value, "filter must not be empty"));
                }
                filter.clone_into(&mut self.log_filter);
            }
            other => return Err(PrefsError::UnknownKey(other.to_owned())),
        }
        Ok(())
    }
}

fn invalid(key: &'static str, value: &str, reason: impl core::fmt::Display) -> PrefsError {
    PrefsError::InvalidValue {
        key,
        value: value.to_owned(),
        reason: reason.to_string(),
    }
}

/// Config-facing port for loading and saving [`EvalPrefs`].
pub trait PrefsPort {
    /// Stored preferences, or defaults when nothing is stored.
    ///
    /// # Errors
    /// Propagates storage and decode failures.
    fn load_prefs(&self) -> Result<EvalPrefs, ConfigError>;
    /// Persists `prefs`.
    ///
    /// # Errors
    /// Propagates storage and encode failures.
    fn save_prefs(&self, prefs: &EvalPrefs) -> Result<(), ConfigError>;
    /// Forgets stored preferences so the next load yields defaults.
    ///
    /// # Errors
    /// Propagates storage failures.
    fn reset_prefs(&self) -> Result<(), ConfigError>;
}

impl<S: ConfigStore> PrefsPort for ConfigService<S> {
    fn load_prefs(&self) -> Result<EvalPrefs, ConfigError> {
        Ok(self.load(PREFS_KEY)?.unwrap_or_default())
    }

    fn save_prefs(&self, prefs: &EvalPrefs) -> Result<(), ConfigError> {
        self.save(PREFS_KEY, prefs)
    }

    fn reset_prefs(&self) -> Result<(), ConfigError> {
        self.remove(PREFS_KEY)
    }
}
