//! Quality tiers and their fixed codec quality table.
//!
//! Clients pick a coarse tier (`low`, `medium`, `high`) and the service maps
//! it to a numeric JPEG quality. The table is static configuration:
//!
//! | Tier     | Quality |
//! |----------|---------|
//! | `low`    | 50      |
//! | `medium` | 70      |
//! | `high`   | 90      |
//!
//! Label parsing is lenient. Anything that is not exactly one of the three
//! labels (including an empty or absent label) resolves to the default tier
//! instead of being rejected.

use std::fmt;

/// Codec quality for [`QualityTier::Low`].
pub const LOW_QUALITY: u8 = 50;

/// Codec quality for [`QualityTier::Medium`].
pub const MEDIUM_QUALITY: u8 = 70;

/// Codec quality for [`QualityTier::High`].
pub const HIGH_QUALITY: u8 = 90;

/// Quality used when the tier label is missing or unrecognized.
pub const DEFAULT_QUALITY: u8 = MEDIUM_QUALITY;

/// Coarse, user-facing compression level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QualityTier {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityTier {
    /// All tiers, from smallest output to highest fidelity.
    pub const ALL: [QualityTier; 3] = [QualityTier::Low, QualityTier::Medium, QualityTier::High];

    /// Resolve a tier from a form label.
    ///
    /// Matching is exact and case-sensitive. `None` and unknown labels yield
    /// the default tier.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("low") => QualityTier::Low,
            Some("medium") => QualityTier::Medium,
            Some("high") => QualityTier::High,
            _ => QualityTier::default(),
        }
    }

    /// Numeric codec quality (0-100 scale) for this tier.
    pub fn quality(self) -> u8 {
        match self {
            QualityTier::Low => LOW_QUALITY,
            QualityTier::Medium => MEDIUM_QUALITY,
            QualityTier::High => HIGH_QUALITY,
        }
    }

    /// Wire label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            QualityTier::Low => "low",
            QualityTier::Medium => "medium",
            QualityTier::High => "high",
        }
    }

    /// Human-readable name, as shown in the UI selector.
    pub fn display_name(self) -> &'static str {
        match self {
            QualityTier::Low => "Low",
            QualityTier::Medium => "Medium",
            QualityTier::High => "High",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map an optional tier label straight to a codec quality.
#[inline]
pub fn resolve_quality(label: Option<&str>) -> u8 {
    QualityTier::from_label(label).quality()
}
