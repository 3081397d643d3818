// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `angleMultiOp`: reduces the `input` multi plug with `operation`.
//!
//! Min/Max of an unconnected multi plug fails with
//! [`OpError::EmptyInput`](crate::math::OpError::EmptyInput).

use angular_registry_api::NodeDef;

use super::{affects_output, angle_array_in, operation_in, OUTPUT_ATTR};
use crate::data::{AttrValue, DataBlock};
use crate::math::{multi_op, Angle, MultiOp};
use crate::node::{ensure_output, ComputeError, NodeType};

/// Host type name.
pub const NODE_NAME: &str = "angleMultiOp";

/// Host type id.
pub const NODE_ID: u32 = 0x0012_6b13;

/// Descriptor.
pub static DEF: NodeDef = NodeDef {
    name: NODE_NAME,
    type_id: NODE_ID,
    attrs: &[
        angle_array_in("input", "i"),
        operation_in(MultiOp::ENUM_FIELDS, MultiOp::DEFAULT.selector()),
        OUTPUT_ATTR,
    ],
    affects: &[affects_output("input"), affects_output("operation")],
};

fn compute(plug: &str, data: &DataBlock) -> Result<AttrValue, ComputeError> {
    ensure_output(&DEF, plug)?;
    let values = data.degrees_array("input")?;
    let op = MultiOp::try_from(data.selector("operation")?)?;
    let result = multi_op(op, &values)?;
    Ok(AttrValue::Angle(Angle::from_degrees(result)))
}

/// Node type for registration.
pub fn node_type() -> NodeType {
    NodeType {
        def: &DEF,
        compute,
    }
}
