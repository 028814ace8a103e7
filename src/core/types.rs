use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Uncertainty range drawn as an error bar around a column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorRange {
    pub low: f64,
    pub high: f64,
}

impl ErrorRange {
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// One column of the chart.
///
/// Order is significant: the index of a point in its sequence decides its
/// x-position, and identity across updates is positional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorRange>,
}

impl DataPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            color: None,
            reference: None,
            error: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = Some(reference);
        self
    }

    #[must_use]
    pub fn with_error(mut self, low: f64, high: f64) -> Self {
        self.error = Some(ErrorRange::new(low, high));
        self
    }
}

/// Color boundaries compared against each column value.
///
/// Ordering (`very_low <= low <= high <= very_high`) is the caller's
/// responsibility and is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    #[serde(default, alias = "very_low", alias = "very-low", alias = "ll")]
    pub very_low: Option<f64>,
    #[serde(default, alias = "l")]
    pub low: Option<f64>,
    #[serde(default, alias = "h")]
    pub high: Option<f64>,
    #[serde(default, alias = "very_high", alias = "very-high", alias = "hh")]
    pub very_high: Option<f64>,
}

/// Threshold keys in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThresholdKind {
    VeryLow,
    Low,
    High,
    VeryHigh,
}

impl Thresholds {
    #[must_use]
    pub fn with_very_low(mut self, value: f64) -> Self {
        self.very_low = Some(value);
        self
    }

    #[must_use]
    pub fn with_low(mut self, value: f64) -> Self {
        self.low = Some(value);
        self
    }

    #[must_use]
    pub fn with_high(mut self, value: f64) -> Self {
        self.high = Some(value);
        self
    }

    #[must_use]
    pub fn with_very_high(mut self, value: f64) -> Self {
        self.very_high = Some(value);
        self
    }

    /// Defined threshold values in ascending key order.
    pub fn defined(&self) -> impl Iterator<Item = (ThresholdKind, f64)> + '_ {
        [
            (ThresholdKind::VeryLow, self.very_low),
            (ThresholdKind::Low, self.low),
            (ThresholdKind::High, self.high),
            (ThresholdKind::VeryHigh, self.very_high),
        ]
        .into_iter()
        .filter_map(|(kind, value)| value.map(|value| (kind, value)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defined().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{DataPoint, ThresholdKind, Thresholds};

    #[test]
    fn thresholds_accept_short_and_long_keys() {
        let short: Thresholds = serde_json::from_str(r#"{"h": 7.2, "hh": 9}"#).expect("short");
        assert_eq!(short.high, Some(7.2));
        assert_eq!(short.very_high, Some(9.0));
        assert_eq!(short.low, None);

        let long: Thresholds =
            serde_json::from_str(r#"{"veryLow": 1, "low": 2, "very_high": 8}"#).expect("long");
        assert_eq!(long.very_low, Some(1.0));
        assert_eq!(long.low, Some(2.0));
        assert_eq!(long.very_high, Some(8.0));
    }

    #[test]
    fn defined_thresholds_keep_ascending_key_order() {
        let thresholds = Thresholds::default().with_very_high(9.0).with_low(2.0);
        let kinds: Vec<_> = thresholds.defined().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![ThresholdKind::Low, ThresholdKind::VeryHigh]);
        assert!(Thresholds::default().is_empty());
    }

    #[test]
    fn data_point_requires_value_only() {
        let point: DataPoint = serde_json::from_str(r#"{"value": 3}"#).expect("point");
        assert_eq!(point, DataPoint::new("", 3.0));

        let point: DataPoint = serde_json::from_str(
            r##"{"name": "Jan", "value": 7, "color": "#f00", "reference": 6, "error": {"low": 5, "high": 8}}"##,
        )
        .expect("full point");
        assert_eq!(
            point,
            DataPoint::new("Jan", 7.0)
                .with_color("#f00")
                .with_reference(6.0)
                .with_error(5.0, 8.0)
        );
        assert!(serde_json::from_str::<DataPoint>(r#"{"name": "x"}"#).is_err());
    }
}
