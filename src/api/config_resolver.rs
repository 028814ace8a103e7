use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{DataPoint, Thresholds};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;
use super::chart_config::{DEFAULT_HEIGHT, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_WIDTH};

/// Untyped chart parameters as handed over by a host framework.
///
/// Keys are normalized (lowercase, `-` and `_` removed) so `showXAxis`,
/// `show_x_axis` and `show-x-axis` address the same entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, Value>", into = "IndexMap<String, Value>")]
pub struct RawChartConfig {
    entries: IndexMap<String, Value>,
}

impl From<IndexMap<String, Value>> for RawChartConfig {
    fn from(entries: IndexMap<String, Value>) -> Self {
        let mut raw = Self::new();
        for (key, value) in entries {
            raw.insert(&key, value);
        }
        raw
    }
}

impl From<RawChartConfig> for IndexMap<String, Value> {
    fn from(raw: RawChartConfig) -> Self {
        raw.entries
    }
}

/// Largest width or height accepted from raw parameters.
pub const MAX_DIMENSION_PX: u32 = 16_384;

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl RawChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })?;
        if !value.is_object() {
            return Err(ChartError::InvalidData(
                "chart config json must be an object".to_owned(),
            ));
        }
        Ok(Self::from_json_value(value))
    }

    /// Takes the entries of a JSON object; any other value yields an empty config.
    #[must_use]
    pub fn from_json_value(value: Value) -> Self {
        let mut raw = Self::new();
        match value {
            Value::Object(map) => {
                for (key, value) in map {
                    raw.insert(&key, value);
                }
            }
            other => warn!(kind = value_kind(&other), "chart config is not an object"),
        }
        raw
    }

    /// Collects framework-serialized attributes where every value is a string.
    #[must_use]
    pub fn from_string_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::new();
        for (key, value) in attributes {
            raw.insert(key.as_ref(), Value::String(value.into()));
        }
        raw
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.entries.insert(normalize_key(key), value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(&normalize_key(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn present(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|value| !value.is_null())
    }

    fn number(&self, key: &str) -> Option<f64> {
        let value = self.present(key)?;
        let parsed = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|number| number.is_finite());
        if parsed.is_none() {
            debug!(key, value = %value, "ignoring malformed numeric chart option");
        }
        parsed
    }

    fn dimension(&self, key: &str, default: u32) -> u32 {
        match self.number(key) {
            Some(number)
                if number > 0.0
                    && number.fract() == 0.0
                    && number <= f64::from(MAX_DIMENSION_PX) =>
            {
                number as u32
            }
            Some(number) => {
                debug!(
                    key,
                    number,
                    default,
                    max = MAX_DIMENSION_PX,
                    "chart dimension must be a positive integer within bounds"
                );
                default
            }
            None => default,
        }
    }

    fn flag(&self, key: &str) -> bool {
        let Some(value) = self.present(key) else {
            return false;
        };
        let parsed = match value {
            Value::Bool(flag) => Some(*flag),
            Value::Number(number) => match number.as_f64() {
                Some(n) if n == 1.0 => Some(true),
                Some(n) if n == 0.0 => Some(false),
                _ => None,
            },
            Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" | "" => Some(false),
                _ => None,
            },
            _ => None,
        };
        parsed.unwrap_or_else(|| {
            debug!(key, value = %value, "ignoring malformed boolean chart option");
            false
        })
    }

    fn thresholds(&self) -> Option<Thresholds> {
        let value = self.present("thresholds")?;
        let parsed = match value {
            Value::String(text) if text.trim().is_empty() => return None,
            Value::String(text) => serde_json::from_str::<Thresholds>(text),
            other => serde_json::from_value::<Thresholds>(other.clone()),
        };
        match parsed {
            Ok(thresholds) if thresholds.is_empty() => None,
            Ok(thresholds) => Some(thresholds),
            Err(err) => {
                debug!(error = %err, "ignoring malformed thresholds");
                None
            }
        }
    }
}

/// Decodes a data payload: a JSON array of points or a string holding one.
///
/// Anything malformed yields an empty sequence.
#[must_use]
pub fn parse_data(value: &Value) -> Vec<DataPoint> {
    let parsed = match value {
        Value::Null => return Vec::new(),
        Value::String(text) => serde_json::from_str::<Vec<DataPoint>>(text),
        other => serde_json::from_value::<Vec<DataPoint>>(other.clone()),
    };
    match parsed {
        Ok(points) => points,
        Err(err) => {
            warn!(error = %err, "malformed chart data, rendering an empty chart");
            Vec::new()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ChartConfig {
    /// Resolves raw parameters into a typed config. Never fails: malformed
    /// optional fields fall back to their defaults.
    #[must_use]
    pub fn resolve(raw: &RawChartConfig) -> Self {
        let mut min = raw.number("min").unwrap_or(DEFAULT_MIN);
        let mut max = raw.number("max").unwrap_or(DEFAULT_MAX);
        if min >= max {
            warn!(min, max, "chart domain requires min < max, using defaults");
            min = DEFAULT_MIN;
            max = DEFAULT_MAX;
        }

        let data = raw.present("data").map(parse_data).unwrap_or_default();

        let config = Self {
            width: raw.dimension("width", DEFAULT_WIDTH),
            height: raw.dimension("height", DEFAULT_HEIGHT),
            min,
            max,
            baseline: raw.number("baseline"),
            thresholds: raw.thresholds(),
            show_colored_thresholds: raw.flag("showColoredThresholds"),
            show_x_axis: raw.flag("showXAxis"),
            show_y_axis: raw.flag("showYAxis"),
            show_tooltip: raw.flag("showTooltip"),
            data,
        };
        debug!(
            width = config.width,
            height = config.height,
            points = config.data.len(),
            "resolved chart config"
        );
        config
    }
}
