use serde::{Deserialize, Serialize};

/// Linear map from a value domain onto a pixel range.
///
/// A collapsed domain (`start == end`) maps every input to `range_start`
/// instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_start;
        }
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse mapping; `None` when either side is collapsed.
    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> Option<f64> {
        let range_span = self.range_end - self.range_start;
        if self.is_degenerate() || range_span == 0.0 {
            return None;
        }
        let normalized = (pixel - self.range_start) / range_span;
        Some(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_domain_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (50.0, 310.0));
        assert_eq!(scale.domain_to_pixel(-1.0), 50.0);
        assert_eq!(scale.domain_to_pixel(5.0), 50.0);
        assert_eq!(scale.pixel_to_domain(60.0), None);
    }

    #[test]
    fn round_trip_within_tolerance() {
        let scale = LinearScale::new((10.0, 110.0), (50.0, 950.0));
        let px = scale.domain_to_pixel(42.5);
        let recovered = scale.pixel_to_domain(px).expect("invertible");
        assert!((recovered - 42.5).abs() <= 1e-9);
    }
}
