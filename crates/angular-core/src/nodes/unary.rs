// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `angleUnaryOp`: `output = <op>(input)`.

use angular_registry_api::NodeDef;

use super::{affects_output, angle_in, operation_in, OUTPUT_ATTR};
use crate::data::{AttrValue, DataBlock};
use crate::math::{unary_op, Angle, UnaryOp};
use crate::node::{ensure_output, ComputeError, NodeType};

/// Host type name.
pub const NODE_NAME: &str = "angleUnaryOp";

/// Host type id.
pub const NODE_ID: u32 = 0x0012_6b15;

/// Descriptor.
pub static DEF: NodeDef = NodeDef {
    name: NODE_NAME,
    type_id: NODE_ID,
    attrs: &[
        angle_in("input", "i", 0.0),
        operation_in(UnaryOp::ENUM_FIELDS, UnaryOp::DEFAULT.selector()),
        OUTPUT_ATTR,
    ],
    affects: &[affects_output("input"), affects_output("operation")],
};

fn compute(plug: &str, data: &DataBlock) -> Result<AttrValue, ComputeError> {
    ensure_output(&DEF, plug)?;
    let a = data.degrees("input")?;
    let op = UnaryOp::try_from(data.selector("operation")?)?;
    Ok(AttrValue::Angle(Angle::from_degrees(unary_op(op, a))))
}

/// Node type for registration.
pub fn node_type() -> NodeType {
    NodeType {
        def: &DEF,
        compute,
    }
}
