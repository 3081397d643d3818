// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The angle operator node types.
//!
//! Each module holds one node: its static [`NodeDef`], its compute function
//! and a `node_type()` constructor. Every node reads inputs in degrees and
//! writes a single angle `output`; every input affects that output.

use angular_registry_api::{Affects, AttrDef, AttrDefault, AttrKind, AttrRole, EnumField, NodeDef};

use crate::node::{NodeType, OUTPUT};

pub mod binary;
pub mod clamp;
pub mod multi;
pub mod scalar;
pub mod soft_clamp;
pub mod unary;

/// Every node descriptor, sorted by type id.
pub static NODE_DEFS: [&NodeDef; 6] = [
    &binary::DEF,
    &multi::DEF,
    &scalar::DEF,
    &unary::DEF,
    &clamp::DEF,
    &soft_clamp::DEF,
];

/// Node types in host registration order.
pub fn plugin_nodes() -> [NodeType; 6] {
    [
        multi::node_type(),
        binary::node_type(),
        scalar::node_type(),
        unary::node_type(),
        clamp::node_type(),
        soft_clamp::node_type(),
    ]
}

/// Keyable angle input.
const fn angle_in(name: &'static str, short_name: &'static str, degrees: f64) -> AttrDef {
    AttrDef {
        name,
        short_name,
        kind: AttrKind::Angle,
        role: AttrRole::Input,
        array: false,
        default: AttrDefault::Number(degrees),
    }
}

/// Keyable angle multi input.
const fn angle_array_in(name: &'static str, short_name: &'static str) -> AttrDef {
    AttrDef {
        name,
        short_name,
        kind: AttrKind::Angle,
        role: AttrRole::Input,
        array: true,
        default: AttrDefault::Empty,
    }
}

/// Keyable double input.
const fn double_in(name: &'static str, short_name: &'static str, value: f64) -> AttrDef {
    AttrDef {
        name,
        short_name,
        kind: AttrKind::Double,
        role: AttrRole::Input,
        array: false,
        default: AttrDefault::Number(value),
    }
}

/// `operation` enum input.
const fn operation_in(fields: &'static [EnumField], default: i16) -> AttrDef {
    AttrDef {
        name: "operation",
        short_name: "op",
        kind: AttrKind::Enum(fields),
        role: AttrRole::Input,
        array: false,
        default: AttrDefault::Selector(default),
    }
}

/// The computed angle output.
const OUTPUT_ATTR: AttrDef = AttrDef {
    name: OUTPUT,
    short_name: "o",
    kind: AttrKind::Angle,
    role: AttrRole::Output,
    array: false,
    default: AttrDefault::Number(0.0),
};

const fn affects_output(input: &'static str) -> Affects {
    Affects {
        input,
        output: OUTPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defs_are_sorted_by_type_id() {
        let ids: Vec<_> = NODE_DEFS.iter().map(|d| d.type_id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn every_input_affects_the_output() {
        for def in NODE_DEFS {
            for input in def.inputs() {
                assert_eq!(
                    def.affected_by(input.name).collect::<Vec<_>>(),
                    [OUTPUT],
                    "{}.{} must affect output",
                    def.name,
                    input.name
                );
            }
            assert_eq!(def.outputs().count(), 1, "{} has one output", def.name);
        }
    }

    #[test]
    fn plugin_order_matches_host_registration() {
        let names: Vec<_> = plugin_nodes().iter().map(NodeType::name).collect();
        assert_eq!(
            names,
            [
                "angleMultiOp",
                "angleBinaryOp",
                "angleScalarOp",
                "angleUnaryOp",
                "clampAngle",
                "softClampAngle"
            ]
        );
    }
}
