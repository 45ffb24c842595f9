// ABOUTME: Parameters for rendering a turbulent star image at a given seeing value
// ABOUTME: Drawing itself is left to the client; this only fixes the numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::observing_constants::turbulence::{
    AMPLITUDE_PER_STEP, BLUR_BELOW, BLUR_PER_STEP, HALO_DIM_BELOW, LAYER_COUNT, SCALE_OFFSET,
    SPECKLES_BELOW, SPECKLE_COUNT,
};
use astroseeing_core::models::SeeingValue;
use serde::Serialize;

/// Per-frame rendering parameters for the seeing simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TurbulenceProfile {
    /// Maximum random displacement of the disc centre (px)
    pub amplitude: f64,
    /// Gaussian blur radius (px), zero in steady air
    pub blur_px: f64,
    /// Outer diffraction rings drawn at half alpha with jittered radius
    pub halo_dimmed: bool,
    /// Scintillation speckles per frame
    pub speckle_count: u8,
    /// Concentric rings per frame
    pub layer_count: u8,
}

/// Rendering parameters for a seeing value
#[must_use]
pub fn turbulence_profile(seeing: SeeingValue) -> TurbulenceProfile {
    let s = seeing.get();
    let steps = f64::from(SCALE_OFFSET - s);
    TurbulenceProfile {
        amplitude: steps * AMPLITUDE_PER_STEP,
        blur_px: if s < BLUR_BELOW { steps * BLUR_PER_STEP } else { 0.0 },
        halo_dimmed: s < HALO_DIM_BELOW,
        speckle_count: if s < SPECKLES_BELOW { SPECKLE_COUNT } else { 0 },
        layer_count: LAYER_COUNT,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn profile(value: u8) -> TurbulenceProfile {
        turbulence_profile(SeeingValue::new(value).unwrap())
    }

    #[test]
    fn test_perfect_seeing_is_nearly_still() {
        let p = profile(10);
        assert_eq!(p.amplitude, 1.5);
        assert_eq!(p.blur_px, 0.0);
        assert!(!p.halo_dimmed);
        assert_eq!(p.speckle_count, 0);
        assert_eq!(p.layer_count, 6);
    }

    #[test]
    fn test_worst_seeing_has_every_effect() {
        let p = profile(1);
        assert_eq!(p.amplitude, 15.0);
        assert_eq!(p.blur_px, 5.0);
        assert!(p.halo_dimmed);
        assert_eq!(p.speckle_count, 10);
    }

    #[test]
    fn test_effect_thresholds() {
        assert_eq!(profile(7).blur_px, 0.0);
        assert_eq!(profile(6).blur_px, 2.5);
        assert!(!profile(5).halo_dimmed);
        assert!(profile(4).halo_dimmed);
        assert_eq!(profile(4).speckle_count, 0);
        assert_eq!(profile(3).speckle_count, 10);
    }

    #[test]
    fn test_amplitude_decreases_with_better_seeing() {
        let amplitudes: Vec<f64> = SeeingValue::all().map(|s| turbulence_profile(s).amplitude).collect();
        assert!(amplitudes.windows(2).all(|pair| pair[0] > pair[1]));
    }
}
