// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `angular`: inspect and evaluate the angle operator nodes.
//!
//! # Usage
//! ```text
//! angular nodes
//! angular describe clampAngle
//! angular eval angleBinaryOp --set input1=30 --set input2=15
//! angular soft-clamp 100 --min 0 --max 90 --max-soft 10
//! angular prefs set precision 3
//! ```
//!
//! Angles are read and printed in the unit stored in preferences (degrees
//! unless changed); `--radians` overrides it per command. Doubles (softness,
//! the scalar operand) are never converted. Logs go to stderr,
//! filtered by `RUST_LOG` or the `log_filter` preference.

#![deny(rust_2018_idioms)]
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
    clippy::dbg_macro
)]
// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![allow(clippy::module_name_repetitions, clippy::multiple_crate_versions)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;
mod eval;
mod output;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use angular_app_core::config::ConfigService;
use angular_app_core::prefs::{EvalPrefs, PrefsPort};
use angular_config_fs::FsConfigStore;
use angular_core::math::{soft_clamp, Angle, AngleUnit};
use angular_core::{AttrValue, NodeRegistry, NodeType};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, PrefsAction};
use crate::output::{EvalReport, NodeDescription, NodeSummary};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = open_config(cli.config_dir.as_deref())?;
    let prefs = config.load_prefs().context("load preferences")?;
    init_logging(&prefs.log_filter)?;
    debug!(?prefs, "loaded preferences");

    let registry = NodeRegistry::with_plugin().context("register node types")?;
    match cli.command {
        Commands::Nodes => cmd_nodes(&registry, cli.json),
        Commands::Describe { node } => cmd_describe(lookup(&registry, &node)?, cli.json),
        Commands::Eval {
            node,
            set,
            plug,
            radians,
        } => {
            let node = lookup(&registry, &node)?;
            cmd_eval(node, &set, &plug, unit_for(&prefs, radians), &prefs, cli.json)
        }
        Commands::SoftClamp {
            value,
            min,
            min_soft,
            max,
            max_soft,
            radians,
        } => {
            let unit = unit_for(&prefs, radians);
            let to_deg = |v: f64| unit.angle(v).degrees();
            // Softness is degrees of operand travel in every unit, as on the node.
            let result = soft_clamp(
                to_deg(value),
                to_deg(min),
                min_soft,
                to_deg(max),
                max_soft,
            );
            let value = AttrValue::Angle(Angle::from_degrees(result));
            print_result(&value, None, None, unit, &prefs, cli.json)
        }
        Commands::Prefs { action } => cmd_prefs(&config, prefs, action, cli.json),
    }
}

fn open_config(dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::with_base(dir)
            .with_context(|| format!("open config dir {}", dir.display()))?,
        None => FsConfigStore::new().context("open config dir")?,
    };
    Ok(ConfigService::new(store))
}

fn init_logging(fallback: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("invalid log filter `{fallback}`"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn unit_for(prefs: &EvalPrefs, radians: bool) -> AngleUnit {
    if radians {
        AngleUnit::Radians
    } else {
        prefs.angle_unit
    }
}

fn lookup(registry: &NodeRegistry, key: &str) -> Result<NodeType> {
    registry.lookup(key).copied().ok_or_else(|| {
        let names: Vec<_> = registry.iter().map(NodeType::name).collect();
        anyhow!("unknown node `{key}` (known: {})", names.join(", "))
    })
}

fn cmd_nodes(registry: &NodeRegistry, json: bool) -> Result<()> {
    let rows: Vec<_> = registry.iter().map(NodeSummary::new).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", output::nodes_table(&rows));
    }
    Ok(())
}

fn cmd_describe(node: NodeType, json: bool) -> Result<()> {
    let desc = NodeDescription::new(node.def);
    if json {
        println!("{}", serde_json::to_string_pretty(&desc)?);
        return Ok(());
    }
    println!("{} ({})", desc.name, desc.id);
    println!("{}", output::attrs_table(&desc));
    for attr in desc.attributes.iter().filter(|a| !a.fields.is_empty()) {
        println!("{} fields:", attr.name);
        for field in &attr.fields {
            println!("  {:>2}  {}", field.value, field.label);
        }
    }
    println!("affects:");
    for (input, out) in &desc.affects {
        println!("  {input} -> {out}");
    }
    Ok(())
}

fn cmd_eval(
    node: NodeType,
    assignments: &[(String, String)],
    plug: &str,
    unit: AngleUnit,
    prefs: &EvalPrefs,
    json: bool,
) -> Result<()> {
    let (_, value) = eval::evaluate(node, assignments, plug, unit)?;
    print_result(&value, Some(node.name()), Some(plug), unit, prefs, json)
}

fn print_result(
    value: &AttrValue,
    node: Option<&'static str>,
    plug: Option<&str>,
    unit: AngleUnit,
    prefs: &EvalPrefs,
    json: bool,
) -> Result<()> {
    if json {
        let report = EvalReport {
            node,
            plug: plug.map(str::to_owned),
            unit,
            value: output::json_value(value, unit),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", output::format_value(value, unit, prefs.precision));
    }
    Ok(())
}

fn cmd_prefs<S: PrefsPort>(
    config: &S,
    mut prefs: EvalPrefs,
    action: PrefsAction,
    json: bool,
) -> Result<()> {
    match action {
        PrefsAction::Show => {}
        PrefsAction::Set { key, value } => {
            prefs.set(&key, &value)?;
            EnvFilter::try_new(&prefs.log_filter)
                .with_context(|| format!("invalid log filter `{}`", prefs.log_filter))?;
            config.save_prefs(&prefs).context("save preferences")?;
            info!(%key, %value, "preference updated");
        }
        PrefsAction::Reset => {
            config.reset_prefs().context("reset preferences")?;
            prefs = config.load_prefs().context("load preferences")?;
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&prefs)?);
    } else {
        println!("precision = {}", prefs.precision);
        println!("angle_unit = {}", prefs.angle_unit);
        println!("log_filter = {}", prefs.log_filter);
    }
    Ok(())
}
