// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for angular tools (config storage, prefs).
//! Keeps the CLI and any host adapters thin.

pub mod config;
pub mod prefs;
