// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `softClampAngle`: [`soft_clamp`](crate::math::soft_clamp) as a node.
//!
//! `minSoft` / `maxSoft` are plain doubles measured in degrees of operand
//! travel.

use angular_registry_api::NodeDef;

use super::{affects_output, angle_in, double_in, OUTPUT_ATTR};
use crate::data::{AttrValue, DataBlock};
use crate::math::{soft_clamp, Angle};
use crate::node::{ensure_output, ComputeError, NodeType};

/// Host type name.
pub const NODE_NAME: &str = "softClampAngle";

/// Host type id (next free id in the plugin's block).
pub const NODE_ID: u32 = 0x0012_6b17;

/// Descriptor.
pub static DEF: NodeDef = NodeDef {
    name: NODE_NAME,
    type_id: NODE_ID,
    attrs: &[
        angle_in("input", "i", 0.0),
        angle_in("min", "mn", 0.0),
        double_in("minSoft", "mns", 0.0),
        angle_in("max", "mx", 0.0),
        double_in("maxSoft", "mxs", 0.0),
        OUTPUT_ATTR,
    ],
    affects: &[
        affects_output("input"),
        affects_output("min"),
        affects_output("minSoft"),
        affects_output("max"),
        affects_output("maxSoft"),
    ],
};

fn compute(plug: &str, data: &DataBlock) -> Result<AttrValue, ComputeError> {
    ensure_output(&DEF, plug)?;
    let v = data.degrees("input")?;
    let mn = data.degrees("min")?;
    let mn_soft = data.double("minSoft")?;
    let mx = data.degrees("max")?;
    let mx_soft = data.double("maxSoft")?;
    Ok(AttrValue::Angle(Angle::from_degrees(soft_clamp(
        v, mn, mn_soft, mx, mx_soft,
    ))))
}

/// Node type for registration.
pub fn node_type() -> NodeType {
    NodeType {
        def: &DEF,
        compute,
    }
}
