// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! angular-core: deterministic angle operators for node-based rigs.
//!
//! The math lives in [`math`] as pure functions of degrees: the soft clamp
//! (a hard clamp with circular-arc corners) plus the binary, scalar, unary and
//! multi operators. The node layer binds each operator to a static descriptor
//! so a graph host can register it, dirty it and ask it for its output.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

/// Pure angle math (soft clamp, operators, angle units).
pub mod math;

mod data;
mod instance;
mod node;
/// Built-in node types.
pub mod nodes;
mod registry;

// Re-exports for stable public API
/// Attribute values and the per-node data block.
pub use data::{AttrValue, DataBlock};
/// Single-node evaluation with dirty tracking.
pub use instance::{InputError, NodeInstance};
/// Node type primitives for registration and compute.
pub use node::{ComputeError, ComputeFn, NodeType, OUTPUT};
/// Registry of node types and the static provider.
pub use registry::{
    AngularRegistry, NodeRegistry, RegistryError, PLUGIN_VENDOR, PLUGIN_VERSION,
    REQUIRED_API_VERSION,
};

/// Descriptor types shared with hosts.
pub use angular_registry_api as registry_api;
