// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure angle math: soft clamping and the arithmetic operators.
//!
//! Everything here is a stateless function of its arguments, safe to call
//! from any thread and to memoize on input equality.

pub mod angle;
pub mod ops;
pub mod soft_clamp;

pub use angle::{Angle, AngleUnit, ParseAngleUnitError};
pub use ops::{
    binary_op, clamp, multi_op, scalar_op, unary_op, BinaryOp, MultiOp, OpError, UnaryOp,
    BINARY_DIV_ZERO, RECIPROCAL_OF_ZERO, SCALAR_DIV_ZERO,
};
pub use soft_clamp::{
    blend_radius, soft_clamp, soft_clamp_bounds, soft_max, soft_min, SoftBound, BLEND_SIN,
    BLEND_TAN,
};
