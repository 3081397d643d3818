// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `angleBinaryOp`: `output = input1 <op> input2`.

use angular_registry_api::NodeDef;

use super::{affects_output, angle_in, operation_in, OUTPUT_ATTR};
use crate::data::{AttrValue, DataBlock};
use crate::math::{binary_op, Angle, BinaryOp};
use crate::node::{ensure_output, ComputeError, NodeType};

/// Host type name.
pub const NODE_NAME: &str = "angleBinaryOp";

/// Host type id.
pub const NODE_ID: u32 = 0x0012_6b12;

/// Descriptor.
pub static DEF: NodeDef = NodeDef {
    name: NODE_NAME,
    type_id: NODE_ID,
    attrs: &[
        angle_in("input1", "i1", 0.0),
        angle_in("input2", "i2", 0.0),
        operation_in(BinaryOp::ENUM_FIELDS, BinaryOp::DEFAULT.selector()),
        OUTPUT_ATTR,
    ],
    affects: &[
        affects_output("input1"),
        affects_output("input2"),
        affects_output("operation"),
    ],
};

fn compute(plug: &str, data: &DataBlock) -> Result<AttrValue, ComputeError> {
    ensure_output(&DEF, plug)?;
    let a = data.degrees("input1")?;
    let b = data.degrees("input2")?;
    let op = BinaryOp::try_from(data.selector("operation")?)?;
    Ok(AttrValue::Angle(Angle::from_degrees(binary_op(op, a, b))))
}

/// Node type for registration.
pub fn node_type() -> NodeType {
    NodeType {
        def: &DEF,
        compute,
    }
}
