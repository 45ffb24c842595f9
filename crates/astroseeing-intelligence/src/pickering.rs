// ABOUTME: Pickering-style seeing descriptor and observing target recommendations
// ABOUTME: Maps the 1-10 seeing scale onto fixed qualitative tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AstroSeeing Contributors

use crate::observing_constants::{pickering, targets};
use astroseeing_core::models::SeeingValue;
use serde::Serialize;
use std::fmt;

/// Qualitative seeing tier, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SeeingDescriptor {
    /// Seeing 1-2
    #[serde(rename = "Terrible (1-2)")]
    Terrible,
    /// Seeing 3-4
    #[serde(rename = "Poor (3-4)")]
    Poor,
    /// Seeing 5-6
    #[serde(rename = "Fair (5-6)")]
    Fair,
    /// Seeing 7-8
    #[serde(rename = "Very Good (7-9)")]
    VeryGood,
    /// Seeing 9-10
    #[serde(rename = "Perfect (10)")]
    Perfect,
}

impl SeeingDescriptor {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Terrible => "Terrible (1-2)",
            Self::Poor => "Poor (3-4)",
            Self::Fair => "Fair (5-6)",
            Self::VeryGood => "Very Good (7-9)",
            Self::Perfect => "Perfect (10)",
        }
    }
}

impl fmt::Display for SeeingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a seeing value
#[must_use]
pub const fn describe_seeing(seeing: SeeingValue) -> SeeingDescriptor {
    match seeing.get() {
        s if s >= pickering::PERFECT_MIN => SeeingDescriptor::Perfect,
        s if s >= pickering::VERY_GOOD_MIN => SeeingDescriptor::VeryGood,
        s if s >= pickering::FAIR_MIN => SeeingDescriptor::Fair,
        s if s >= pickering::POOR_MIN => SeeingDescriptor::Poor,
        _ => SeeingDescriptor::Terrible,
    }
}

/// Icon tag rendered next to a target suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetIcon {
    /// Planet glyph
    Planet,
    /// Sparkles glyph
    Sparkles,
    /// Moon glyph
    Moon,
    /// Milky Way glyph
    MilkyWay,
    /// Telescope glyph
    Telescope,
}

/// One suggested observing target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObservingTarget {
    /// Target name
    pub title: &'static str,
    /// Why it suits the current seeing
    pub description: &'static str,
    /// Icon tag
    pub icon: TargetIcon,
}

const PLANETARY_TARGETS: [ObservingTarget; 2] = [
    ObservingTarget {
        title: "Planets",
        description: "Fine detail on Jupiter/Saturn.",
        icon: TargetIcon::Planet,
    },
    ObservingTarget {
        title: "Double Stars",
        description: "Clean splitting of close pairs.",
        icon: TargetIcon::Sparkles,
    },
];

const CLUSTER_TARGETS: [ObservingTarget; 2] = [
    ObservingTarget {
        title: "Star Clusters",
        description: "Sharp, bright point-like stars.",
        icon: TargetIcon::Sparkles,
    },
    ObservingTarget {
        title: "The Moon",
        description: "Major craters clearly visible.",
        icon: TargetIcon::Moon,
    },
];

const WIDE_FIELD_TARGETS: [ObservingTarget; 2] = [
    ObservingTarget {
        title: "Milky Way",
        description: "Wide-field observation.",
        icon: TargetIcon::MilkyWay,
    },
    ObservingTarget {
        title: "Deep Sky",
        description: "Large diffuse objects.",
        icon: TargetIcon::Telescope,
    },
];

/// Two targets suited to the current seeing, best first
#[must_use]
pub const fn recommend_targets(seeing: SeeingValue) -> [ObservingTarget; 2] {
    match seeing.get() {
        s if s >= targets::PLANETARY_MIN => PLANETARY_TARGETS,
        s if s >= targets::CLUSTERS_MIN => CLUSTER_TARGETS,
        _ => WIDE_FIELD_TARGETS,
    }
}
