use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear map from a data domain to a pixel range.
///
/// A degenerate domain (`start == end`) maps every value to the middle of
/// the range so a single column still lands inside the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = if self.is_degenerate() {
            0.5
        } else {
            (value - self.domain_start) / (self.domain_end - self.domain_start)
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::LinearScale;

    #[test]
    fn map_and_invert_round_trip() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("scale");
        assert_relative_eq!(scale.map(0.0), 100.0);
        assert_relative_eq!(scale.map(10.0), 0.0);
        assert_relative_eq!(scale.map(2.5), 75.0);
        assert_relative_eq!(scale.invert(75.0), 2.5);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((0.0, 0.0), (10.0, 30.0)).expect("scale");
        assert!(scale.is_degenerate());
        assert_relative_eq!(scale.map(0.0), 20.0);
        assert_relative_eq!(scale.map(7.0), 20.0);
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(LinearScale::new((0.0, f64::NAN), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((0.0, 1.0), (f64::INFINITY, 1.0)).is_err());
    }
}
