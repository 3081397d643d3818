// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Attribute storage handed to node compute functions.

use std::collections::BTreeMap;

use angular_registry_api::{AttrDef, AttrDefault, AttrKind, NodeDef};

use crate::math::Angle;
use crate::node::ComputeError;

/// Value held by one attribute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
pub enum AttrValue {
    /// Single angle.
    Angle(Angle),
    /// Plain number.
    Double(f64),
    /// Enum selector.
    Enum(i16),
    /// Ordered angles of a multi plug.
    AngleArray(Vec<Angle>),
}

impl AttrValue {
    /// Initial value for an attribute that was never set.
    pub fn default_for(def: &AttrDef) -> Self {
        match (def.kind, def.array, def.default) {
            (AttrKind::Angle, true, _) => Self::AngleArray(Vec::new()),
            (AttrKind::Angle, false, AttrDefault::Number(d)) => Self::Angle(Angle::from_degrees(d)),
            (AttrKind::Angle, false, _) => Self::Angle(Angle::ZERO),
            (AttrKind::Double, _, AttrDefault::Number(d)) => Self::Double(d),
            (AttrKind::Double, _, _) => Self::Double(0.0),
            (AttrKind::Enum(_), _, AttrDefault::Selector(s)) => Self::Enum(s),
            (AttrKind::Enum(fields), _, _) => Self::Enum(fields.first().map_or(0, |f| f.value)),
        }
    }

    /// Name of the value's kind, matching [`AttrKind::as_str`] for scalars.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Angle(_) => "angle",
            Self::Double(_) => "double",
            Self::Enum(_) => "enum",
            Self::AngleArray(_) => "angle[]",
        }
    }

    /// Whether this value can be stored in an attribute described by `def`.
    pub fn fits(&self, def: &AttrDef) -> bool {
        match (self, def.kind) {
            (Self::Angle(_), AttrKind::Angle) | (Self::AngleArray(_), AttrKind::Angle) => {
                matches!(self, Self::AngleArray(_)) == def.array
            }
            (Self::Double(_), AttrKind::Double) => true,
            (Self::Enum(v), AttrKind::Enum(fields)) => fields.iter().any(|f| f.value == *v),
            _ => false,
        }
    }

    /// Bitwise equality: unlike `==`, `-0.0` differs from `0.0` and a NaN
    /// equals an identical NaN.
    pub fn is_identical(&self, other: &Self) -> bool {
        let same = |a: f64, b: f64| a.to_bits() == b.to_bits();
        match (self, other) {
            (Self::Angle(a), Self::Angle(b)) => same(a.degrees(), b.degrees()),
            (Self::Double(a), Self::Double(b)) => same(*a, *b),
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::AngleArray(a), Self::AngleArray(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(x, y)| same(x.degrees(), y.degrees()))
            }
            _ => false,
        }
    }

    /// Returns the angle if this is a single angle.
    pub fn as_angle(&self) -> Option<Angle> {
        match self {
            Self::Angle(a) => Some(*a),
            _ => None,
        }
    }
}

/// Expected kind name for an attribute descriptor.
pub(crate) fn expected_kind(def: &AttrDef) -> &'static str {
    if def.array {
        "angle[]"
    } else {
        def.kind.as_str()
    }
}

/// Attribute values of one node, keyed by long attribute name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataBlock {
    values: BTreeMap<&'static str, AttrValue>,
}

impl DataBlock {
    /// Block seeded with the defaults of every input attribute of `def`.
    pub fn for_node(def: &NodeDef) -> Self {
        let values = def
            .inputs()
            .map(|attr| (attr.name, AttrValue::default_for(attr)))
            .collect();
        Self { values }
    }

    /// Stores `value` under `name`, returning the previous value.
    pub fn set(&mut self, name: &'static str, value: AttrValue) -> Option<AttrValue> {
        self.values.insert(name, value)
    }

    /// Raw value of `name`.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    /// Iterates attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    fn require(&self, name: &str) -> Result<&AttrValue, ComputeError> {
        self.values
            .get(name)
            .ok_or_else(|| ComputeError::MissingAttr(name.to_owned()))
    }

    fn mismatch(name: &str, expected: &'static str, found: &AttrValue) -> ComputeError {
        ComputeError::TypeMismatch {
            attr: name.to_owned(),
            expected,
            found: found.kind_name(),
        }
    }

    /// Angle attribute in degrees.
    pub fn degrees(&self, name: &str) -> Result<f64, ComputeError> {
        match self.require(name)? {
            AttrValue::Angle(a) => Ok(a.degrees()),
            other => Err(Self::mismatch(name, "angle", other)),
        }
    }

    /// Double attribute.
    pub fn double(&self, name: &str) -> Result<f64, ComputeError> {
        match self.require(name)? {
            AttrValue::Double(v) => Ok(*v),
            other => Err(Self::mismatch(name, "double", other)),
        }
    }

    /// Enum attribute selector.
    pub fn selector(&self, name: &str) -> Result<i16, ComputeError> {
        match self.require(name)? {
            AttrValue::Enum(v) => Ok(*v),
            other => Err(Self::mismatch(name, "enum", other)),
        }
    }

    /// Array angle attribute, each element in degrees.
    pub fn degrees_array(&self, name: &str) -> Result<Vec<f64>, ComputeError> {
        match self.require(name)? {
            AttrValue::AngleArray(items) => Ok(items.iter().map(|a| a.degrees()).collect()),
            other => Err(Self::mismatch(name, "angle[]", other)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use angular_registry_api::{AttrRole, EnumField};

    const FIELDS: &[EnumField] = &[EnumField {
        label: "Only",
        value: 3,
    }];

    fn attr(kind: AttrKind, array: bool, default: AttrDefault) -> AttrDef {
        AttrDef {
            name: "a",
            short_name: "a",
            kind,
            role: AttrRole::Input,
            array,
            default,
        }
    }

    #[test]
    fn defaults_follow_descriptor() {
        let angle = attr(AttrKind::Angle, false, AttrDefault::Number(90.0));
        assert_eq!(
            AttrValue::default_for(&angle),
            AttrValue::Angle(Angle::from_degrees(90.0))
        );
        let array = attr(AttrKind::Angle, true, AttrDefault::Empty);
        assert_eq!(AttrValue::default_for(&array), AttrValue::AngleArray(vec![]));
        let en = attr(AttrKind::Enum(FIELDS), false, AttrDefault::Empty);
        assert_eq!(AttrValue::default_for(&en), AttrValue::Enum(3));
    }

    #[test]
    fn fits_checks_kind_arity_and_enum_fields() {
        let angle = attr(AttrKind::Angle, false, AttrDefault::Empty);
        let array = attr(AttrKind::Angle, true, AttrDefault::Empty);
        let en = attr(AttrKind::Enum(FIELDS), false, AttrDefault::Empty);

        assert!(AttrValue::Angle(Angle::ZERO).fits(&angle));
        assert!(!AttrValue::Angle(Angle::ZERO).fits(&array));
        assert!(AttrValue::AngleArray(vec![]).fits(&array));
        assert!(!AttrValue::Double(1.0).fits(&angle));
        assert!(AttrValue::Enum(3).fits(&en));
        assert!(!AttrValue::Enum(4).fits(&en));
    }

    #[test]
    fn identity_distinguishes_signed_zero() {
        let pos = AttrValue::Angle(Angle::from_degrees(0.0));
        let neg = AttrValue::Angle(Angle::from_degrees(-0.0));
        assert_eq!(pos, neg);
        assert!(!pos.is_identical(&neg));
        assert!(!AttrValue::Double(0.0).is_identical(&AttrValue::Double(-0.0)));
        assert!(AttrValue::Double(f64::NAN).is_identical(&AttrValue::Double(f64::NAN)));
        assert!(!AttrValue::Double(1.0).is_identical(&AttrValue::Enum(1)));
        assert!(AttrValue::AngleArray(vec![Angle::from_degrees(1.0)])
            .is_identical(&AttrValue::AngleArray(vec![Angle::from_degrees(1.0)])));
        assert!(!AttrValue::AngleArray(vec![Angle::ZERO])
            .is_identical(&AttrValue::AngleArray(vec![Angle::from_degrees(-0.0)])));
    }

    #[test]
    fn typed_reads_report_mismatches() {
        let mut block = DataBlock::default();
        block.set("x", AttrValue::Double(2.0));
        assert_eq!(block.double("x"), Ok(2.0));
        assert_eq!(
            block.degrees("x"),
            Err(ComputeError::TypeMismatch {
                attr: "x".into(),
                expected: "angle",
                found: "double"
            })
        );
        assert_eq!(
            block.selector("y"),
            Err(ComputeError::MissingAttr("y".into()))
        );
    }
}
