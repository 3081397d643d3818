// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Turning textual `--set` assignments into attribute values and evaluating.

use anyhow::{anyhow, bail, Context, Result};
use angular_core::math::{Angle, AngleUnit};
use angular_core::registry_api::{AttrDef, AttrKind};
use angular_core::{AttrValue, NodeInstance, NodeType};
use tracing::debug;

/// Parses `raw` as a value for `attr`, reading angles in `unit`.
///
/// Enum attributes accept the selector number or a field label; labels match
/// case-insensitively with or without spaces (`"Absolute Value"`,
/// `absolutevalue`).
pub fn parse_value(attr: &AttrDef, raw: &str, unit: AngleUnit) -> Result<AttrValue> {
    match attr.kind {
        AttrKind::Angle if attr.array => {
            let angles = raw
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| parse_number(attr, item).map(|v| unit.angle(v)))
                .collect::<Result<Vec<Angle>>>()?;
            Ok(AttrValue::AngleArray(angles))
        }
        AttrKind::Angle => Ok(AttrValue::Angle(unit.angle(parse_number(attr, raw)?))),
        AttrKind::Double => Ok(AttrValue::Double(parse_number(attr, raw)?)),
        AttrKind::Enum(fields) => {
            if let Ok(selector) = raw.parse::<i16>() {
                return Ok(AttrValue::Enum(selector));
            }
            let squashed: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            fields
                .iter()
                .find(|field| {
                    field.label.eq_ignore_ascii_case(raw)
                        || field.label.replace(' ', "").eq_ignore_ascii_case(&squashed)
                })
                .map(|field| AttrValue::Enum(field.value))
                .ok_or_else(|| {
                    let labels: Vec<_> = fields.iter().map(|f| f.label).collect();
                    anyhow!(
                        "`{raw}` is not a valid {} (expected one of: {})",
                        attr.name,
                        labels.join(", ")
                    )
                })
        }
    }
}

fn parse_number(attr: &AttrDef, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .with_context(|| format!("`{raw}` is not a number for `{}`", attr.name))
}

/// Builds an instance of `node`, applies `assignments` and evaluates `plug`.
pub fn evaluate(
    node: NodeType,
    assignments: &[(String, String)],
    plug: &str,
    unit: AngleUnit,
) -> Result<(NodeInstance, AttrValue)> {
    let mut instance = NodeInstance::new(node);
    for (name, raw) in assignments {
        let Some(attr) = node.def.attr(name) else {
            bail!("{} has no attribute `{name}`", node.name());
        };
        let value = parse_value(attr, raw, unit)?;
        instance
            .set_input(name, value)
            .with_context(|| format!("setting {}.{name}", node.name()))?;
    }
    let value = instance
        .evaluate(plug)
        .with_context(|| format!("evaluating {}.{plug}", node.name()))?;
    debug!(node = node.name(), plug, ?value, "evaluated");
    Ok((instance, value))
}
