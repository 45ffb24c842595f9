// ABOUTME: Validated seeing value and telescope aperture inputs
// ABOUTME: Construction rejects values outside the 1-10 scale and non-positive apertures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::constants::limits::{MAX_SEEING, MIN_SEEING};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Atmospheric stability on a 1-10 scale (10 = perfectly steady air)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeeingValue(u8);

impl SeeingValue {
    /// Worst possible seeing
    pub const WORST: Self = Self(MIN_SEEING);
    /// Perfect seeing
    pub const PERFECT: Self = Self(MAX_SEEING);

    /// Create a seeing value
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `value` is not in 1..=10
    pub fn new(value: u8) -> AppResult<Self> {
        if (MIN_SEEING..=MAX_SEEING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::out_of_range(format!(
                "seeing must be between {MIN_SEEING} and {MAX_SEEING}, got {value}"
            )))
        }
    }

    /// Raw scale value
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every value on the scale, worst first
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_SEEING..=MAX_SEEING).map(Self)
    }
}

impl TryFrom<u8> for SeeingValue {
    type Error = AppError;

    fn try_from(value: u8) -> AppResult<Self> {
        Self::new(value)
    }
}

impl From<SeeingValue> for u8 {
    fn from(value: SeeingValue) -> Self {
        value.0
    }
}

impl fmt::Display for SeeingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Telescope aperture in millimetres, always finite and strictly positive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ApertureMm(f64);

impl ApertureMm {
    /// Create an aperture value
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for zero, negative, NaN or infinite input
    pub fn new(millimetres: f64) -> AppResult<Self> {
        if millimetres.is_finite() && millimetres > 0.0 {
            Ok(Self(millimetres))
        } else {
            Err(AppError::out_of_range(format!(
                "aperture must be a positive number of millimetres, got {millimetres}"
            )))
        }
    }

    /// Aperture in millimetres
    #[must_use]
    pub const fn millimetres(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ApertureMm {
    type Error = AppError;

    fn try_from(value: f64) -> AppResult<Self> {
        Self::new(value)
    }
}

impl From<ApertureMm> for f64 {
    fn from(value: ApertureMm) -> Self {
        value.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_seeing_bounds() {
        assert!(SeeingValue::new(0).is_err());
        assert!(SeeingValue::new(11).is_err());
        assert_eq!(SeeingValue::new(1).unwrap(), SeeingValue::WORST);
        assert_eq!(SeeingValue::new(10).unwrap(), SeeingValue::PERFECT);
    }

    #[test]
    fn test_seeing_scale_has_ten_steps() {
        let values: Vec<u8> = SeeingValue::all().map(SeeingValue::get).collect();
        assert_eq!(values, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_seeing_deserialization_is_validated() {
        let ok: SeeingValue = serde_json::from_str("7").unwrap();
        assert_eq!(ok.get(), 7);
        assert!(serde_json::from_str::<SeeingValue>("12").is_err());
    }

    #[test]
    fn test_aperture_rejects_non_positive() {
        for bad in [0.0, -130.0, f64::NAN, f64::INFINITY] {
            let error = ApertureMm::new(bad).unwrap_err();
            assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        }
        assert!((ApertureMm::new(130.0).unwrap().millimetres() - 130.0).abs() < f64::EPSILON);
    }
}
