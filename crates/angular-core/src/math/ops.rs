// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Arithmetic operators behind the angle operator nodes.
//!
//! Every operator is a total function of finite inputs. Undefined results are
//! replaced by fixed sentinels rather than infinities:
//! - binary divide by zero yields [`BINARY_DIV_ZERO`]
//! - scalar divide by zero yields [`SCALAR_DIV_ZERO`]
//! - reciprocal of zero yields [`RECIPROCAL_OF_ZERO`]
//!
//! The two divide sentinels differ. Rigs built against the host plugin depend
//! on both values, so they are kept apart.
//!
//! The only failure is a min/max reduction over no operands
//! ([`OpError::EmptyInput`]).

use core::fmt;

use angular_registry_api::EnumField;
use thiserror::Error;

/// Result of `a / 0` for [`binary_op`].
pub const BINARY_DIV_ZERO: f64 = 10000.0;

/// Result of `a / 0` for [`scalar_op`].
pub const SCALAR_DIV_ZERO: f64 = 100000.0;

/// Result of `1 / 0` for [`unary_op`]: the host's single-precision float max.
#[allow(clippy::cast_lossless)]
pub const RECIPROCAL_OF_ZERO: f64 = f32::MAX as f64;

/// Errors produced by operator dispatch.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OpError {
    /// A min/max reduction was asked to reduce zero operands.
    #[error("{0} of an empty operand list is undefined")]
    EmptyInput(MultiOp),
    /// The host selector does not name an operation of this kind.
    #[error("unknown {kind} selector: {selector}")]
    UnknownOperation {
        /// Operator family (`"binary"`, `"unary"`, `"multi"`).
        kind: &'static str,
        /// Raw selector received from the host.
        selector: i16,
    },
}

macro_rules! selector_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(i16)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            /// Every operation in selector order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Selector the host attribute starts with.
            pub const DEFAULT: Self = Self::$default;

            /// Host enum fields, one per operation.
            pub const ENUM_FIELDS: &'static [EnumField] = &[
                $(EnumField { label: $label, value: $value },)+
            ];

            /// Label used for the host enum field.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Raw host selector.
            pub const fn selector(self) -> i16 {
                self as i16
            }

            /// Looks an operation up by its label (case-insensitive) or its
            /// variant name.
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|op| {
                    op.label().eq_ignore_ascii_case(label)
                        || stringify_variant(*op).eq_ignore_ascii_case(label)
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::DEFAULT
            }
        }

        impl TryFrom<i16> for $name {
            type Error = OpError;

            fn try_from(selector: i16) -> Result<Self, Self::Error> {
                match selector {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(OpError::UnknownOperation {
                        kind: $kind,
                        selector,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

selector_enum! {
    /// Two-operand operation shared by the binary and scalar nodes.
    BinaryOp, "binary", default = Add {
        /// Pass the first operand through.
        None = 0 => "No Operation",
        /// `a + b`.
        Add = 1 => "Add",
        /// `a - b`.
        Subtract = 2 => "Subtract",
        /// `a * b`.
        Multiply = 3 => "Multiply",
        /// `a / b`, with a sentinel for `b == 0`.
        Divide = 4 => "Divide",
        /// `a` raised to `b`.
        Power = 5 => "Power",
    }
}

selector_enum! {
    /// Single-operand operation.
    UnaryOp, "unary", default = Sign {
        /// Pass the operand through.
        None = 0 => "No Operation",
        /// `1` for `a >= 0`, `-1` otherwise.
        Sign = 1 => "Sign",
        /// `-a`.
        Negate = 2 => "Negate",
        /// `1 / a`, with a sentinel for `a == 0`.
        Reciprocal = 3 => "Reciprocal",
        /// Round toward negative infinity.
        Floor = 4 => "Floor",
        /// Round toward positive infinity.
        Ceiling = 5 => "Ceiling",
        /// `|a|`.
        Absolute = 6 => "Absolute Value",
    }
}

selector_enum! {
    /// Reduction over an ordered list of operands.
    MultiOp, "multi", default = Sum {
        /// Always `0`.
        None = 0 => "No Operation",
        /// Left fold of `+` starting at `0`.
        Sum = 1 => "Sum",
        /// Left fold of `-` starting at `0`.
        Difference = 2 => "Difference",
        /// Left fold of `*` starting at `1`.
        Product = 3 => "Product",
        /// Smallest operand.
        Min = 4 => "Minimum",
        /// Largest operand.
        Max = 5 => "Maximum",
    }
}

fn stringify_variant<T: fmt::Debug>(op: T) -> String {
    format!("{op:?}")
}

fn two_operand(op: BinaryOp, a: f64, b: f64, div_zero: f64) -> f64 {
    match op {
        BinaryOp::None => a,
        BinaryOp::Add => a + b,
        BinaryOp::Subtract => a - b,
        BinaryOp::Multiply => a * b,
        BinaryOp::Divide => {
            if b == 0.0 {
                div_zero
            } else {
                a / b
            }
        }
        BinaryOp::Power => libm::pow(a, b),
    }
}

/// Applies `op` to two angles. Divide by zero yields [`BINARY_DIV_ZERO`].
pub fn binary_op(op: BinaryOp, a: f64, b: f64) -> f64 {
    two_operand(op, a, b, BINARY_DIV_ZERO)
}

/// Applies `op` to an angle and a free scalar. Divide by zero yields
/// [`SCALAR_DIV_ZERO`].
pub fn scalar_op(op: BinaryOp, a: f64, scalar: f64) -> f64 {
    two_operand(op, a, scalar, SCALAR_DIV_ZERO)
}

/// Applies `op` to a single angle. Reciprocal of zero yields
/// [`RECIPROCAL_OF_ZERO`].
pub fn unary_op(op: UnaryOp, a: f64) -> f64 {
    match op {
        UnaryOp::None => a,
        UnaryOp::Sign => {
            if a >= 0.0 {
                1.0
            } else {
                -1.0
            }
        }
        UnaryOp::Negate => -a,
        UnaryOp::Reciprocal => {
            if a == 0.0 {
                RECIPROCAL_OF_ZERO
            } else {
                1.0 / a
            }
        }
        UnaryOp::Floor => libm::floor(a),
        UnaryOp::Ceiling => libm::ceil(a),
        UnaryOp::Absolute => libm::fabs(a),
    }
}

/// Reduces `values` with `op`.
///
/// # Errors
/// Returns [`OpError::EmptyInput`] for [`MultiOp::Min`] / [`MultiOp::Max`]
/// over an empty slice. The folds have identities and never fail.
pub fn multi_op(op: MultiOp, values: &[f64]) -> Result<f64, OpError> {
    let result = match op {
        MultiOp::None => 0.0,
        MultiOp::Sum => values.iter().fold(0.0, |acc, v| acc + v),
        MultiOp::Difference => values.iter().fold(0.0, |acc, v| acc - v),
        MultiOp::Product => values.iter().fold(1.0, |acc, v| acc * v),
        MultiOp::Min => values
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or(OpError::EmptyInput(op))?,
        MultiOp::Max => values
            .iter()
            .copied()
            .reduce(f64::max)
            .ok_or(OpError::EmptyInput(op))?,
    };
    Ok(result)
}

/// Hard clamp: `max(min(v, mx), mn)`.
///
/// With inverted bounds (`mx < mn`) the lower bound wins and the result is
/// `mn`.
pub fn clamp(v: f64, mn: f64, mx: f64) -> f64 {
    v.min(mx).max(mn)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn selectors_round_trip_through_try_from() {
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::try_from(op.selector()), Ok(*op));
        }
        for op in UnaryOp::ALL {
            assert_eq!(UnaryOp::try_from(op.selector()), Ok(*op));
        }
        for op in MultiOp::ALL {
            assert_eq!(MultiOp::try_from(op.selector()), Ok(*op));
        }
    }

    #[test]
    fn unknown_selector_is_rejected() {
        assert_eq!(
            UnaryOp::try_from(7),
            Err(OpError::UnknownOperation {
                kind: "unary",
                selector: 7
            })
        );
        assert!(BinaryOp::try_from(-1).is_err());
    }

    #[test]
    fn labels_resolve_case_insensitively() {
        assert_eq!(UnaryOp::from_label("absolute value"), Some(UnaryOp::Absolute));
        assert_eq!(UnaryOp::from_label("Absolute"), Some(UnaryOp::Absolute));
        assert_eq!(MultiOp::from_label("MINIMUM"), Some(MultiOp::Min));
        assert_eq!(MultiOp::from_label("max"), Some(MultiOp::Max));
        assert_eq!(BinaryOp::from_label("modulo"), None);
    }

    #[test]
    fn enum_fields_follow_selector_order() {
        let labels: Vec<_> = UnaryOp::ENUM_FIELDS.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            [
                "No Operation",
                "Sign",
                "Negate",
                "Reciprocal",
                "Floor",
                "Ceiling",
                "Absolute Value"
            ]
        );
        for (field, op) in MultiOp::ENUM_FIELDS.iter().zip(MultiOp::ALL) {
            assert_eq!(field.value, op.selector());
        }
    }

    #[test]
    fn defaults_match_host_attribute_defaults() {
        assert_eq!(BinaryOp::default(), BinaryOp::Add);
        assert_eq!(UnaryOp::default(), UnaryOp::Sign);
        assert_eq!(MultiOp::default(), MultiOp::Sum);
    }

    #[test]
    fn sign_of_zero_is_positive() {
        assert_eq!(unary_op(UnaryOp::Sign, 0.0), 1.0);
        assert_eq!(unary_op(UnaryOp::Sign, -0.0), 1.0);
        assert_eq!(unary_op(UnaryOp::Sign, -3.5), -1.0);
    }

    #[test]
    fn none_passes_the_first_operand() {
        assert_eq!(binary_op(BinaryOp::None, 4.0, 9.0), 4.0);
        assert_eq!(scalar_op(BinaryOp::None, 4.0, 9.0), 4.0);
        assert_eq!(unary_op(UnaryOp::None, -2.5), -2.5);
        assert_eq!(multi_op(MultiOp::None, &[1.0, 2.0]), Ok(0.0));
    }

    #[test]
    fn empty_min_max_is_an_error() {
        assert_eq!(
            multi_op(MultiOp::Min, &[]),
            Err(OpError::EmptyInput(MultiOp::Min))
        );
        assert_eq!(
            multi_op(MultiOp::Max, &[]),
            Err(OpError::EmptyInput(MultiOp::Max))
        );
        assert_eq!(multi_op(MultiOp::Sum, &[]), Ok(0.0));
        assert_eq!(multi_op(MultiOp::Product, &[]), Ok(1.0));
    }

    #[test]
    fn error_messages_name_the_operation() {
        let err = OpError::EmptyInput(MultiOp::Max);
        assert_eq!(err.to_string(), "Maximum of an empty operand list is undefined");
    }
}
