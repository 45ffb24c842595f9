// ABOUTME: Maximum usable magnification from telescope aperture and current seeing
// ABOUTME: Applies a seeing-tier multiplier to the aperture and floors the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::observing_constants::magnification::{
    AVERAGE_MULTIPLIER, AVERAGE_TIER_MAX, EXCELLENT_MULTIPLIER, GOOD_MULTIPLIER, GOOD_TIER_MAX,
    POOR_MULTIPLIER, POOR_TIER_MAX,
};
use astroseeing_core::models::{ApertureMm, SeeingValue};

/// Aperture multiplier for a seeing value
#[must_use]
pub const fn magnification_multiplier(seeing: SeeingValue) -> f64 {
    match seeing.get() {
        s if s <= POOR_TIER_MAX => POOR_MULTIPLIER,
        s if s <= AVERAGE_TIER_MAX => AVERAGE_MULTIPLIER,
        s if s <= GOOD_TIER_MAX => GOOD_MULTIPLIER,
        _ => EXCELLENT_MULTIPLIER,
    }
}

/// Highest magnification worth using tonight: `floor(aperture_mm * multiplier)`
#[must_use]
pub fn max_magnification(aperture: ApertureMm, seeing: SeeingValue) -> u32 {
    (aperture.millimetres() * magnification_multiplier(seeing)).floor() as u32
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seeing(value: u8) -> SeeingValue {
        SeeingValue::new(value).unwrap()
    }

    fn aperture(mm: f64) -> ApertureMm {
        ApertureMm::new(mm).unwrap()
    }

    #[test]
    fn test_reference_telescope() {
        assert_eq!(max_magnification(aperture(130.0), seeing(5)), 156);
        assert_eq!(max_magnification(aperture(130.0), seeing(9)), 260);
        assert_eq!(max_magnification(aperture(130.0), seeing(1)), 104);
    }

    #[test]
    fn test_tier_boundaries() {
        let scope = aperture(100.0);
        let expected = [80, 80, 80, 120, 120, 120, 160, 160, 200, 200];
        for (value, want) in (1..=10).zip(expected) {
            assert_eq!(max_magnification(scope, seeing(value)), want, "seeing {value}");
        }
    }

    #[test]
    fn test_result_is_floored() {
        // 73 * 1.6 = 116.8
        assert_eq!(max_magnification(aperture(73.0), seeing(7)), 116);
        // 0.5 * 0.8 = 0.4
        assert_eq!(max_magnification(aperture(0.5), seeing(2)), 0);
    }
}
