// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![cfg(feature = "serde")]
#![allow(missing_docs)]

use angular_core::math::{Angle, AngleUnit};
use angular_core::AttrValue;

#[test]
fn attr_values_serialize_tagged_in_degrees() {
    let json = serde_json::to_value(AttrValue::Angle(Angle::from_degrees(45.0))).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "angle", "value": 45.0 }));

    let json = serde_json::to_value(AttrValue::Enum(3)).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "enum", "value": 3 }));
}

#[test]
fn angle_units_use_lowercase_names() {
    assert_eq!(
        serde_json::to_string(&AngleUnit::Radians).unwrap(),
        "\"radians\""
    );
    let unit: AngleUnit = serde_json::from_str("\"degrees\"").unwrap();
    assert_eq!(unit, AngleUnit::Degrees);
}
