use std::fmt;
use std::time::Duration;
use crate::constants::*;

// Stored as a count of half seconds so repeated steps never drift.
const HALVES_MIN: u8 = (MIN_DURATION / DURATION_STEP) as u8;
const HALVES_MAX: u8 = (MAX_DURATION / DURATION_STEP) as u8;

/// How long each slide stays on screen while playing.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct SlideDuration {
    halves: u8,
}

impl SlideDuration {
    /// Snaps `seconds` to the nearest half second inside the allowed range.
    /// Non-finite input falls back to the default.
    pub fn from_secs(seconds: f32) -> Self {
        if !seconds.is_finite() {
            return Self::default();
        }
        let halves = (seconds / DURATION_STEP).round().clamp(HALVES_MIN as f32, HALVES_MAX as f32);
        Self { halves: halves as u8 }
    }

    pub fn as_secs_f32(self) -> f32 {
        self.halves as f32 * DURATION_STEP
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.as_secs_f32())
    }

    pub fn is_min(self) -> bool {
        self.halves <= HALVES_MIN
    }

    pub fn is_max(self) -> bool {
        self.halves >= HALVES_MAX
    }

    /// One step longer, or `None` when already at the upper bound.
    pub fn increased(self) -> Option<Self> {
        (!self.is_max()).then(|| Self { halves: self.halves + 1 })
    }

    /// One step shorter, or `None` when already at the lower bound.
    pub fn decreased(self) -> Option<Self> {
        (!self.is_min()).then(|| Self { halves: self.halves - 1 })
    }

    /// Text shown next to the slider, e.g. "1 second" or "5.5 seconds".
    pub fn display_text(self) -> String {
        if self.halves == 2 {
            format!("{} second", self)
        } else {
            format!("{} seconds", self)
        }
    }
}

impl Default for SlideDuration {
    fn default() -> Self {
        Self::from_secs(DEFAULT_DURATION)
    }
}

impl fmt::Display for SlideDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f32 Display already drops a trailing ".0"
        write!(f, "{}", self.as_secs_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_and_clamps() {
        assert_eq!(SlideDuration::from_secs(5.2).as_secs_f32(), 5.0);
        assert_eq!(SlideDuration::from_secs(5.3).as_secs_f32(), 5.5);
        assert_eq!(SlideDuration::from_secs(0.0).as_secs_f32(), MIN_DURATION);
        assert_eq!(SlideDuration::from_secs(99.0).as_secs_f32(), MAX_DURATION);
        assert_eq!(SlideDuration::from_secs(f32::NAN), SlideDuration::default());
    }

    #[test]
    fn steps_stop_at_bounds() {
        let max = SlideDuration::from_secs(MAX_DURATION);
        assert!(max.increased().is_none());
        assert_eq!(max.decreased().map(SlideDuration::as_secs_f32), Some(14.5));

        let min = SlideDuration::from_secs(MIN_DURATION);
        assert!(min.decreased().is_none());
        assert_eq!(min.increased().map(SlideDuration::as_secs_f32), Some(1.5));
    }

    #[test]
    fn display_text_formats_like_the_slider_label() {
        assert_eq!(SlideDuration::default().display_text(), "5 seconds");
        assert_eq!(SlideDuration::from_secs(1.0).display_text(), "1 second");
        assert_eq!(SlideDuration::from_secs(7.5).display_text(), "7.5 seconds");
    }
}
