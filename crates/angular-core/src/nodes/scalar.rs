// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `angleScalarOp`: `output = input <op> scalar`.
//!
//! `scalar` is a plain double: it scales or offsets the angle and is never
//! converted between angle units.

use angular_registry_api::NodeDef;

use super::{affects_output, angle_in, double_in, operation_in, OUTPUT_ATTR};
use crate::data::{AttrValue, DataBlock};
use crate::math::{scalar_op, Angle, BinaryOp};
use crate::node::{ensure_output, ComputeError, NodeType};

/// Host type name.
pub const NODE_NAME: &str = "angleScalarOp";

/// Host type id.
pub const NODE_ID: u32 = 0x0012_6b14;

/// Descriptor.
pub static DEF: NodeDef = NodeDef {
    name: NODE_NAME,
    type_id: NODE_ID,
    attrs: &[
        angle_in("input", "i", 0.0),
        double_in("scalar", "sc", 0.0),
        operation_in(BinaryOp::ENUM_FIELDS, BinaryOp::DEFAULT.selector()),
        OUTPUT_ATTR,
    ],
    affects: &[
        affects_output("input"),
        affects_output("scalar"),
        affects_output("operation"),
    ],
};

fn compute(plug: &str, data: &DataBlock) -> Result<AttrValue, ComputeError> {
    ensure_output(&DEF, plug)?;
    let a = data.degrees("input")?;
    let scalar = data.double("scalar")?;
    let op = BinaryOp::try_from(data.selector("operation")?)?;
    Ok(AttrValue::Angle(Angle::from_degrees(scalar_op(op, a, scalar))))
}

/// Node type for registration.
pub fn node_type() -> NodeType {
    NodeType {
        def: &DEF,
        compute,
    }
}
