// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text and JSON rendering for CLI results.

use angular_core::math::AngleUnit;
use angular_core::registry_api::{AttrDef, AttrDefault, AttrKind, AttrRole, NodeDef};
use angular_core::{AttrValue, NodeType};
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

/// One row of `angular nodes`.
#[derive(Debug, Serialize)]
pub struct NodeSummary {
    /// Host type name.
    pub name: &'static str,
    /// Host type id, as `0x` hex.
    pub id: String,
    /// Input attribute names in declaration order.
    pub inputs: Vec<&'static str>,
}

impl NodeSummary {
    pub fn new(node: &NodeType) -> Self {
        Self {
            name: node.name(),
            id: format_id(node.type_id()),
            inputs: node.def.inputs().map(|a| a.name).collect(),
        }
    }
}

/// Attribute entry of `angular describe`.
#[derive(Debug, Serialize)]
pub struct AttrSummary {
    pub name: &'static str,
    pub short_name: &'static str,
    pub kind: &'static str,
    pub role: &'static str,
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldSummary>,
}

#[derive(Debug, Serialize)]
pub struct FieldSummary {
    pub label: &'static str,
    pub value: i16,
}

/// Full description of a node type.
#[derive(Debug, Serialize)]
pub struct NodeDescription {
    pub name: &'static str,
    pub id: String,
    pub attributes: Vec<AttrSummary>,
    pub affects: Vec<(&'static str, &'static str)>,
}

impl NodeDescription {
    pub fn new(def: &NodeDef) -> Self {
        Self {
            name: def.name,
            id: format_id(def.type_id),
            attributes: def.attrs.iter().map(AttrSummary::new).collect(),
            affects: def.affects.iter().map(|a| (a.input, a.output)).collect(),
        }
    }
}

impl AttrSummary {
    fn new(attr: &AttrDef) -> Self {
        let kind = if attr.array { "angle[]" } else { attr.kind.as_str() };
        let default = match (attr.default, attr.kind) {
            (AttrDefault::Number(v), AttrKind::Angle) if attr.role == AttrRole::Input => {
                Some(format!("{v}°"))
            }
            (AttrDefault::Number(v), AttrKind::Double) => Some(v.to_string()),
            (AttrDefault::Selector(s), AttrKind::Enum(fields)) => Some(
                fields
                    .iter()
                    .find(|f| f.value == s)
                    .map_or_else(|| s.to_string(), |f| f.label.to_owned()),
            ),
            (AttrDefault::Empty, _) if attr.array => Some("[]".to_owned()),
            _ => None,
        };
        Self {
            name: attr.name,
            short_name: attr.short_name,
            kind,
            role: match attr.role {
                AttrRole::Input => "input",
                AttrRole::Output => "output",
            },
            default,
            fields: attr
                .enum_fields()
                .iter()
                .map(|f| FieldSummary {
                    label: f.label,
                    value: f.value,
                })
                .collect(),
        }
    }
}

/// Result of `eval` / `soft-clamp`.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plug: Option<String>,
    pub unit: AngleUnit,
    pub value: serde_json::Value,
}

/// `0x`-prefixed, zero-padded type id.
pub fn format_id(id: u32) -> String {
    format!("{id:#010x}")
}

/// Renders an attribute value for humans.
pub fn format_value(value: &AttrValue, unit: AngleUnit, precision: usize) -> String {
    match value {
        AttrValue::Angle(a) => format!("{:.precision$}", unit.value_of(*a)),
        AttrValue::Double(v) => format!("{v:.precision$}"),
        AttrValue::Enum(s) => s.to_string(),
        AttrValue::AngleArray(items) => items
            .iter()
            .map(|a| format!("{:.precision$}", unit.value_of(*a)))
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// JSON form of an attribute value, angles in `unit`.
pub fn json_value(value: &AttrValue, unit: AngleUnit) -> serde_json::Value {
    match value {
        AttrValue::Angle(a) => unit.value_of(*a).into(),
        AttrValue::Double(v) => (*v).into(),
        AttrValue::Enum(s) => (*s).into(),
        AttrValue::AngleArray(items) => items
            .iter()
            .map(|a| serde_json::Value::from(unit.value_of(*a)))
            .collect(),
    }
}

/// Table of `angular nodes`.
pub fn nodes_table(rows: &[NodeSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Name", "Id", "Inputs"]);
    for row in rows {
        table.add_row(vec![row.name.to_owned(), row.id.clone(), row.inputs.join(", ")]);
    }
    table
}

/// Attribute table of `angular describe`.
pub fn attrs_table(desc: &NodeDescription) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Attribute", "Short", "Kind", "Role", "Default"]);
    for attr in &desc.attributes {
        table.add_row(vec![
            attr.name.to_owned(),
            attr.short_name.to_owned(),
            attr.kind.to_owned(),
            attr.role.to_owned(),
            attr.default.clone().unwrap_or_default(),
        ]);
    }
    table
}
