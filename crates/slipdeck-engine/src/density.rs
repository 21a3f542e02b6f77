use serde::Serialize;

/// Viewport height below which compact spacing applies, in CSS-pixel
/// scale. 720 is the canonical cutoff.
pub const COMPACT_MAX_HEIGHT: f64 = 720.0;

/// Viewport height below which even compact spacing clips; drops
/// straight to ultra.
pub const ULTRA_MAX_HEIGHT: f64 = 640.0;

/// Discrete presentation-density level chosen to keep slide content
/// legible within the available viewport. Derived, never persisted;
/// recomputed on every resize and after every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityTier {
    Normal,
    Compact,
    Ultra,
}

impl DensityTier {
    /// Next denser tier, or `None` when already at the densest.
    pub fn escalated(self) -> Option<DensityTier> {
        match self {
            DensityTier::Normal => Some(DensityTier::Compact),
            DensityTier::Compact => Some(DensityTier::Ultra),
            DensityTier::Ultra => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DensityTier::Normal => "normal",
            DensityTier::Compact => "compact",
            DensityTier::Ultra => "ultra",
        }
    }
}

/// Map a viewport height to a density tier. Pure step function: the
/// boundary value itself belongs to the roomier tier (640 is compact,
/// 720 is normal).
pub fn classify(height: f64) -> DensityTier {
    if height < ULTRA_MAX_HEIGHT {
        DensityTier::Ultra
    } else if height < COMPACT_MAX_HEIGHT {
        DensityTier::Compact
    } else {
        DensityTier::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values() {
        assert_eq!(classify(639.0), DensityTier::Ultra);
        assert_eq!(classify(640.0), DensityTier::Compact);
        assert_eq!(classify(719.0), DensityTier::Compact);
        assert_eq!(classify(720.0), DensityTier::Normal);
    }

    #[test]
    fn extremes() {
        assert_eq!(classify(0.0), DensityTier::Ultra);
        assert_eq!(classify(-1.0), DensityTier::Ultra);
        assert_eq!(classify(2160.0), DensityTier::Normal);
    }

    #[test]
    fn escalation_chain_terminates() {
        assert_eq!(DensityTier::Normal.escalated(), Some(DensityTier::Compact));
        assert_eq!(DensityTier::Compact.escalated(), Some(DensityTier::Ultra));
        assert_eq!(DensityTier::Ultra.escalated(), None);
    }
}
