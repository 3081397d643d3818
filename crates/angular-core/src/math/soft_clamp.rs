// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Soft clamping: a hard min/max clamp with its corners rounded off.
//!
//! Each bound may carry a softness. Near a soft bound the identity line is
//! replaced by a circular arc that leaves the identity with slope 1 and meets
//! the flat clamped line `y = bound` with slope 0, so the curve is C¹.
//!
//! Geometry (upper bound `mx`, radius `r`):
//! - the arc spans 45° of a circle, so it leaves the identity line at
//!   `mx - (s - t) * r` and lands on `y = mx` at `mx + t * r`
//! - `s = sin(45°)`, `t = tan(22.5°)`; the radius is `softness / (s * t)`, so
//!   the blend region ends exactly `softness / s` past the bound
//! - softness `0` collapses the arc and the function is the hard clamp
//!
//! Transcendentals go through `libm` so results do not depend on the
//! platform's math library.

/// `sin(45°)`.
pub const BLEND_SIN: f64 = core::f64::consts::FRAC_1_SQRT_2;

/// `tan(22.5°)`.
pub const BLEND_TAN: f64 = core::f64::consts::SQRT_2 - 1.0;

/// Arc radius used for a given softness. Non-positive (or NaN) softness has no
/// arc and yields `0.0`.
#[inline]
pub fn blend_radius(softness: f64) -> f64 {
    if softness > 0.0 {
        softness / (BLEND_SIN * BLEND_TAN)
    } else {
        0.0
    }
}

/// One-sided upper soft clamp of `v` against `mx`.
///
/// Values below the blend region pass through unchanged, values past it
/// return `mx` exactly.
pub fn soft_max(v: f64, mx: f64, softness: f64) -> f64 {
    if v.is_nan() {
        return v;
    }
    let r = blend_radius(softness);
    if r == 0.0 {
        return if v > mx { mx } else { v };
    }

    let lo = mx - (BLEND_SIN - BLEND_TAN) * r;
    if v <= lo {
        return v;
    }
    if v >= mx + r * BLEND_TAN {
        return mx;
    }

    let arc = mx + r * libm::cos(libm::asin((mx - v) / r + BLEND_TAN)) - r;
    // The arc is concave and sits under both tangents; rounding must not push
    // it outside that envelope. An infinite radius gives a NaN arc, which the
    // envelope also discards.
    arc.min(v.min(mx)).max(lo)
}

/// One-sided lower soft clamp of `v` against `mn`. Mirror image of [`soft_max`].
pub fn soft_min(v: f64, mn: f64, softness: f64) -> f64 {
    if v.is_nan() {
        return v;
    }
    let r = blend_radius(softness);
    if r == 0.0 {
        return if v < mn { mn } else { v };
    }

    let hi = mn + (BLEND_SIN - BLEND_TAN) * r;
    if v >= hi {
        return v;
    }
    if v <= mn - r * BLEND_TAN {
        return mn;
    }

    let arc = mn - r * libm::cos(libm::asin((mn - v) / r - BLEND_TAN)) + r;
    arc.max(v.max(mn)).min(hi)
}

/// Two-sided soft clamp.
///
/// The lower clamp runs first and its output feeds the upper clamp, so
/// overlapping blend regions saturate progressively.
///
/// When `mx < mn` the bounds are treated as intentionally inverted: `mx` (with
/// `mx_soft`) becomes the lower bound and `mn` (with `mn_soft`) the upper one,
/// clamping into `[mx, mn]` instead of an empty range.
pub fn soft_clamp(v: f64, mn: f64, mn_soft: f64, mx: f64, mx_soft: f64) -> f64 {
    if mx < mn {
        soft_max(soft_min(v, mx, mx_soft), mn, mn_soft)
    } else {
        soft_max(soft_min(v, mn, mn_soft), mx, mx_soft)
    }
}

/// A bound and the softness of its blend.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoftBound {
    /// Limit value (degrees).
    pub value: f64,
    /// Size of the blend region; `0.0` is a hard bound.
    pub softness: f64,
}

impl SoftBound {
    /// Bound with a blend region of the given softness.
    pub const fn new(value: f64, softness: f64) -> Self {
        Self { value, softness }
    }

    /// Bound without a blend region.
    pub const fn hard(value: f64) -> Self {
        Self {
            value,
            softness: 0.0,
        }
    }

    /// Operand range over which the blend toward this bound happens, as seen
    /// from below (upper bound) or from above (lower bound when `lower`).
    pub fn blend_range(&self, lower: bool) -> (f64, f64) {
        let r = blend_radius(self.softness);
        if lower {
            (
                self.value - r * BLEND_TAN,
                self.value + (BLEND_SIN - BLEND_TAN) * r,
            )
        } else {
            (
                self.value - (BLEND_SIN - BLEND_TAN) * r,
                self.value + r * BLEND_TAN,
            )
        }
    }
}

/// [`soft_clamp`] taking its bounds as [`SoftBound`]s.
pub fn soft_clamp_bounds(v: f64, lower: SoftBound, upper: SoftBound) -> f64 {
    soft_clamp(
        v,
        lower.value,
        lower.softness,
        upper.value,
        upper.softness,
    )
}
