// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "angular", author, version, about = "Inspect and evaluate angle operator nodes")]
pub struct Cli {
    /// Directory holding preference files (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered node types
    Nodes,
    /// Show a node's attributes, enum fields and affects edges
    Describe {
        /// Node type name, or id in decimal / 0x hex
        node: String,
    },
    /// Evaluate one node with the given input values
    Eval {
        /// Node type name, or id in decimal / 0x hex
        node: String,
        /// Input assignment `attr=value` (repeatable); arrays are comma-separated
        #[arg(long = "set", value_name = "ATTR=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
        /// Plug to evaluate
        #[arg(long, default_value = "output")]
        plug: String,
        /// Read and print angles in radians regardless of preferences (doubles are not converted)
        #[arg(long)]
        radians: bool,
    },
    /// Soft-clamp a single value
    SoftClamp {
        /// Operand
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Lower bound
        #[arg(long, allow_negative_numbers = true)]
        min: f64,
        /// Softness of the lower bound, in degrees of operand travel (never converted by --radians)
        #[arg(long, default_value_t = 0.0)]
        min_soft: f64,
        /// Upper bound
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
        /// Softness of the upper bound, in degrees of operand travel (never converted by --radians)
        #[arg(long, default_value_t = 0.0)]
        max_soft: f64,
        /// Read and print angles in radians regardless of preferences
        #[arg(long)]
        radians: bool,
    },
    /// Show or edit stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// Print the effective preferences
    Show,
    /// Set one preference (`precision`, `angle_unit`, `log_filter`)
    Set {
        /// Preference key
        key: String,
        /// New value
        value: String,
    },
    /// Forget stored preferences
    Reset,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (attr, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ATTR=VALUE, got `{raw}`"))?;
    let attr = attr.trim();
    if attr.is_empty() {
        return Err(format!("missing attribute name in `{raw}`"));
    }
    Ok((attr.to_owned(), value.trim().to_owned()))
}
