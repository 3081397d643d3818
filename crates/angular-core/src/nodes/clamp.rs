// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `clampAngle`: restricts `input` to `[min, max]`.

use angular_registry_api::NodeDef;

use super::{affects_output, angle_in, OUTPUT_ATTR};
use crate::data::{AttrValue, DataBlock};
use crate::math::{clamp, Angle};
use crate::node::{ensure_output, ComputeError, NodeType};

/// Host type name.
pub const NODE_NAME: &str = "clampAngle";

/// Host type id.
pub const NODE_ID: u32 = 0x0012_6b16;

/// Descriptor.
pub static DEF: NodeDef = NodeDef {
    name: NODE_NAME,
    type_id: NODE_ID,
    attrs: &[
        angle_in("input", "i", 0.0),
        angle_in("min", "mn", 0.0),
        angle_in("max", "mx", 90.0),
        OUTPUT_ATTR,
    ],
    affects: &[
        affects_output("input"),
        affects_output("min"),
        affects_output("max"),
    ],
};

fn compute(plug: &str, data: &DataBlock) -> Result<AttrValue, ComputeError> {
    ensure_output(&DEF, plug)?;
    let v = data.degrees("input")?;
    let mn = data.degrees("min")?;
    let mx = data.degrees("max")?;
    Ok(AttrValue::Angle(Angle::from_degrees(clamp(v, mn, mx))))
}

/// Node type for registration.
pub fn node_type() -> NodeType {
    NodeType {
        def: &DEF,
        compute,
    }
}
