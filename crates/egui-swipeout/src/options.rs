use crate::errors::SwipeoutError;
use serde::{Deserialize, Serialize};

/// How drag distance past a natural limit is damped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElasticPolicy {
    /// Only drags past the full width of a group are compressed.
    Overswipe,
    /// Drags past the full width are compressed, and so is a drag that leaves
    /// the territory of the group revealed at drag start and crosses zero.
    #[default]
    CrossBoundary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeoutOptions {
    /// Pixels that must be swiped before a release snaps the panel open.
    pub threshold: f32,
    /// A gesture starting with more vertical travel than this is scroll intent.
    pub vertical_tolerance: f32,
    /// Exponent of the resistance curve applied to excess drag distance.
    pub exponent: f32,
    pub elasticity: ElasticPolicy,
    /// Keep a drag on the side it started revealing.
    pub direction_lock: bool,
    /// Duration of a snap transition in seconds.
    pub animation_time: f32,
    pub row_height: f32,
}

impl Default for SwipeoutOptions {
    fn default() -> Self {
        Self::bidirectional()
    }
}

impl SwipeoutOptions {
    pub const DEFAULT_THRESHOLD: f32 = 45.0;
    pub const LOCKED_THRESHOLD: f32 = 20.0;
    pub const DEFAULT_VERTICAL_TOLERANCE: f32 = 5.0;
    pub const LOCKED_VERTICAL_TOLERANCE: f32 = 30.0;
    pub const DEFAULT_ANIMATION_TIME: f32 = 0.25;
    pub const DEFAULT_ROW_HEIGHT: f32 = 56.0;

    /// Both sides reveal freely; only overswipe past a group's width resists.
    pub fn symmetric() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            vertical_tolerance: Self::DEFAULT_VERTICAL_TOLERANCE,
            exponent: 0.8,
            elasticity: ElasticPolicy::Overswipe,
            direction_lock: false,
            animation_time: Self::DEFAULT_ANIMATION_TIME,
            row_height: Self::DEFAULT_ROW_HEIGHT,
        }
    }

    /// Both sides reveal, crossing from one revealed group toward the other
    /// resists, and a long enough swipe reveals the opposite side directly.
    pub fn bidirectional() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            vertical_tolerance: Self::DEFAULT_VERTICAL_TOLERANCE,
            exponent: 0.65,
            elasticity: ElasticPolicy::CrossBoundary,
            direction_lock: false,
            animation_time: Self::DEFAULT_ANIMATION_TIME,
            row_height: Self::DEFAULT_ROW_HEIGHT,
        }
    }

    /// A drag stays on the side it started on and never reveals the opposite
    /// group. Uses a shorter threshold and a wider vertical tolerance.
    pub fn direction_locked() -> Self {
        Self {
            threshold: Self::LOCKED_THRESHOLD,
            vertical_tolerance: Self::LOCKED_VERTICAL_TOLERANCE,
            exponent: 0.65,
            elasticity: ElasticPolicy::CrossBoundary,
            direction_lock: true,
            animation_time: Self::DEFAULT_ANIMATION_TIME,
            row_height: Self::DEFAULT_ROW_HEIGHT,
        }
    }

    #[inline]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    pub fn vertical_tolerance(mut self, tolerance: f32) -> Self {
        self.vertical_tolerance = tolerance;
        self
    }

    #[inline]
    pub fn exponent(mut self, exponent: f32) -> Self {
        self.exponent = exponent;
        self
    }

    #[inline]
    pub fn elasticity(mut self, elasticity: ElasticPolicy) -> Self {
        self.elasticity = elasticity;
        self
    }

    #[inline]
    pub fn direction_lock(mut self, lock: bool) -> Self {
        self.direction_lock = lock;
        self
    }

    #[inline]
    pub fn animation_time(mut self, seconds: f32) -> Self {
        self.animation_time = seconds;
        self
    }

    #[inline]
    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), SwipeoutError> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(SwipeoutError::InvalidThreshold(self.threshold));
        }
        if !(self.vertical_tolerance.is_finite() && self.vertical_tolerance >= 0.0) {
            return Err(SwipeoutError::InvalidTolerance(self.vertical_tolerance));
        }
        if !(self.exponent > 0.0 && self.exponent < 1.0) {
            return Err(SwipeoutError::InvalidExponent(self.exponent));
        }
        if !(self.animation_time.is_finite() && self.animation_time >= 0.0) {
            return Err(SwipeoutError::InvalidAnimationTime(self.animation_time));
        }
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(SwipeoutError::InvalidRowHeight(self.row_height));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for options in [
            SwipeoutOptions::symmetric(),
            SwipeoutOptions::bidirectional(),
            SwipeoutOptions::direction_locked(),
        ] {
            assert_eq!(options.validate(), Ok(()));
        }
    }

    #[test]
    fn default_is_bidirectional() {
        let options = SwipeoutOptions::default();
        assert_eq!(options, SwipeoutOptions::bidirectional());
        assert_eq!(options.threshold, 45.0);
    }

    #[test]
    fn direction_locked_keeps_its_own_constants() {
        let options = SwipeoutOptions::direction_locked();
        assert_eq!(options.threshold, 20.0);
        assert_eq!(options.vertical_tolerance, 30.0);
        assert!(options.direction_lock);
    }

    #[test]
    fn rejects_bad_values() {
        let base = SwipeoutOptions::default();
        assert_eq!(
            base.clone().threshold(0.0).validate(),
            Err(SwipeoutError::InvalidThreshold(0.0))
        );
        assert_eq!(
            base.clone().vertical_tolerance(-1.0).validate(),
            Err(SwipeoutError::InvalidTolerance(-1.0))
        );
        assert_eq!(
            base.clone().exponent(1.0).validate(),
            Err(SwipeoutError::InvalidExponent(1.0))
        );
        assert!(matches!(
            base.clone().exponent(f32::NAN).validate(),
            Err(SwipeoutError::InvalidExponent(_))
        ));
        assert_eq!(
            base.clone().animation_time(-0.1).validate(),
            Err(SwipeoutError::InvalidAnimationTime(-0.1))
        );
        assert_eq!(
            base.row_height(0.0).validate(),
            Err(SwipeoutError::InvalidRowHeight(0.0))
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: SwipeoutOptions =
            serde_json::from_str(r#"{ "threshold": 60.0, "elasticity": "overswipe" }"#).unwrap();
        assert_eq!(options.threshold, 60.0);
        assert_eq!(options.elasticity, ElasticPolicy::Overswipe);
        assert_eq!(options.exponent, SwipeoutOptions::bidirectional().exponent);
    }
}
