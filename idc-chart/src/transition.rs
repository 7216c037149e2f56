//! Time-based transitions.
//!
//! A [`Transition`] only knows when it started, how long it runs and how it
//! eases; callers feed it the current clock (`now_ms`), which keeps every
//! interpolation deterministic and testable without a browser.

/// Timing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow end
    #[default]
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// A transition that is already finished at `start_ms`.
    pub fn instant(start_ms: f64) -> Self {
        Self::new(start_ms, 0.0, Easing::Linear)
    }

    /// Eased progress in `[0, 1]` at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.easing
            .apply((now_ms - self.start_ms) / self.duration_ms)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_in_out_is_symmetric() {
        let e = Easing::CubicInOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(0.5), 0.5);
        assert_eq!(e.apply(1.0), 1.0);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-12);
        assert!(e.apply(0.1) < 0.1, "starts slower than linear");
    }

    #[test]
    fn zero_duration_is_complete_immediately() {
        let t = Transition::instant(100.0);
        assert_eq!(t.progress(0.0), 1.0);
        assert!(t.is_complete(100.0));
    }

    #[test]
    fn progress_is_clamped() {
        let t = Transition::new(1000.0, 750.0, Easing::CubicInOut);
        assert_eq!(t.progress(900.0), 0.0);
        assert_eq!(t.progress(1375.0), 0.5);
        assert_eq!(t.progress(5000.0), 1.0);
        assert!(!t.is_complete(1500.0));
        assert!(t.is_complete(1750.0));
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    }
}
