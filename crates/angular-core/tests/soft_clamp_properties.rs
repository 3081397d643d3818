// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::float_cmp)]

use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use angular_core::math::{blend_radius, soft_clamp, soft_max, soft_min, BLEND_SIN, BLEND_TAN};

fn angle() -> impl Strategy<Value = f64> {
    -720.0_f64..720.0
}

fn softness() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0_f64..60.0]
}

proptest! {
    #[test]
    fn soft_max_passthrough_and_saturation(mx in angle(), sft in 0.001_f64..60.0, d in 0.0_f64..500.0) {
        let r = blend_radius(sft);
        let start = mx - (BLEND_SIN - BLEND_TAN) * r;
        let end = mx + r * BLEND_TAN;
        prop_assert_eq!(soft_max(start - d, mx, sft), start - d);
        prop_assert_eq!(soft_max(end + d, mx, sft), mx);
    }

    #[test]
    fn one_sided_clamps_never_cross_their_bound(v in angle(), b in angle(), sft in softness()) {
        prop_assert!(soft_max(v, b, sft) <= b);
        prop_assert!(soft_max(v, b, sft) <= v);
        prop_assert!(soft_min(v, b, sft) >= b);
        prop_assert!(soft_min(v, b, sft) >= v);
    }

    #[test]
    fn soft_clamp_is_monotonic(
        a in angle(),
        b in angle(),
        mn in angle(),
        mn_s in softness(),
        mx in angle(),
        mx_s in softness(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(soft_clamp(lo, mn, mn_s, mx, mx_s) <= soft_clamp(hi, mn, mn_s, mx, mx_s));
    }

    #[test]
    fn hard_bounds_match_min_max(v in angle(), a in angle(), b in angle()) {
        let (mn, mx) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(soft_clamp(v, mn, 0.0, mx, 0.0), v.min(mx).max(mn));
    }
}

#[test]
fn soft_clamp_output_stays_under_the_upper_bound_pinned_seed() {
    // Pinned so a failure reproduces on any machine.
    const SEED_BYTES: [u8; 32] = [
        0x5c, 0x1a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0,
    ];

    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    let case = (angle(), angle(), softness(), angle(), softness());
    runner
        .run(&case, |(v, a, a_s, b, b_s)| {
            let out = soft_clamp(v, a, a_s, b, b_s);
            // The upper bound always runs last; the lower edge can only be
            // undercut by the upper bound's own blend region.
            let (lo, hi, hi_s) = if b < a { (b, a, a_s) } else { (a, b, b_s) };
            let floor = lo.min(hi - (BLEND_SIN - BLEND_TAN) * blend_radius(hi_s));
            prop_assert!(out <= hi, "v={v} out={out} hi={hi}");
            prop_assert!(out >= floor, "v={v} out={out} floor={floor}");
            Ok(())
        })
        .unwrap();
}
