//! Band and linear scales.
//!
//! The band scale places one category per band across the plot width, the
//! linear scale maps counts onto the plot height with the origin at the
//! bottom (`range = [height, 0]`).

/// Ordinal scale mapping each category to an evenly spaced band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    /// `padding` applies both between bands and at the outer edges.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self {
            domain,
            range,
            padding,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let span = self.range.1 - self.range.0;
        span / (n - self.padding + self.padding * 2.0).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band for `category`, `None` if not in the domain.
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.domain.iter().position(|c| c == category)?;
        Some(self.start() + self.step() * index as f64)
    }

    /// Horizontal center of the band for `category`.
    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category).map(|x| x + self.bandwidth() / 2.0)
    }

    fn start(&self) -> f64 {
        let n = self.domain.len() as f64;
        let span = self.range.1 - self.range.0;
        self.range.0 + (span - self.step() * (n - self.padding)) / 2.0
    }
}

/// Continuous scale from a value domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Tick spacing for roughly `count` ticks, always 1, 2 or 5 × 10^k.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        let span = (d1 - d0).abs();
        if span == 0.0 || count == 0 || !span.is_finite() {
            return 0.0;
        }
        let raw = span / count as f64;
        let power = raw.log10().floor();
        let base = 10f64.powf(power);
        let error = raw / base;
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        factor * base
    }

    /// Evenly spaced, human friendly values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = self.tick_step(count);
        if step == 0.0 {
            return vec![self.domain.0];
        }
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        // The 1e-9 slack keeps a bound that is a multiple of the step as a tick.
        if step < 1.0 {
            // Divide by the inverse step so fractional ticks stay exact.
            let inverse = (1.0 / step).round();
            let first = (lo * inverse - 1e-9).ceil() as i64;
            let last = (hi * inverse + 1e-9).floor() as i64;
            return (first..=last).map(|i| i as f64 / inverse).collect();
        }
        let first = (lo / step - 1e-9).ceil() as i64;
        let last = (hi / step + 1e-9).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Upper bound of the count axis: `headroom × max`, never below 1.
pub fn count_domain_max(max_count: u64, headroom: f64) -> f64 {
    (max_count as f64 * headroom).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn band(categories: &[&str]) -> BandScale {
        BandScale::new(
            categories.iter().map(|c| c.to_string()).collect(),
            (0.0, 880.0),
            0.2,
        )
    }

    #[test]
    fn band_layout_with_padding() {
        let scale = band(&["a", "b", "c", "d"]);
        // step = 880 / (4 + 0.2)
        let step = 880.0 / 4.2;
        assert!(close(scale.step(), step));
        assert!(close(scale.bandwidth(), step * 0.8));
        assert!(close(scale.position("a").unwrap(), step * 0.2));
        assert!(close(scale.position("d").unwrap(), step * 3.2));
        // outer padding is symmetric
        let right_gap = 880.0 - (scale.position("d").unwrap() + scale.bandwidth());
        assert!(close(right_gap, scale.position("a").unwrap()));
        assert_eq!(scale.position("zzz"), None);
    }

    #[test]
    fn band_center_is_mid_band() {
        let scale = band(&["only"]);
        assert!(close(scale.center("only").unwrap(), 440.0));
    }

    #[test]
    fn empty_band_domain_does_not_divide_by_zero() {
        let scale = band(&[]);
        assert!(scale.step().is_finite());
        assert_eq!(scale.position("a"), None);
    }

    #[test]
    fn linear_maps_origin_to_bottom() {
        let y = LinearScale::new((0.0, 110.0), (440.0, 0.0));
        assert!(close(y.scale(0.0), 440.0));
        assert!(close(y.scale(110.0), 0.0));
        assert!(close(y.scale(55.0), 220.0));
    }

    #[test]
    fn ticks_use_nice_steps() {
        let y = LinearScale::new((0.0, 2200.0), (440.0, 0.0));
        assert_eq!(y.tick_step(10), 200.0);
        let ticks = y.ticks(10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&2200.0));
        assert_eq!(ticks.len(), 12);
    }

    #[test]
    fn small_domains_get_fractional_ticks() {
        let y = LinearScale::new((0.0, 1.1), (440.0, 0.0));
        let step = y.tick_step(10);
        assert!(close(step, 0.1));
        assert_eq!(y.ticks(10).len(), 12);
    }

    #[test]
    fn count_domain_has_headroom_and_a_floor() {
        assert!(close(count_domain_max(100, 1.1), 110.0));
        assert!(close(count_domain_max(0, 1.1), 1.0));
    }
}
