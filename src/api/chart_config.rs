use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LayoutInput, Thresholds, Viewport};

pub const DEFAULT_WIDTH: u32 = 150;
pub const DEFAULT_HEIGHT: u32 = 75;
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;

/// Typed chart configuration with every optional field resolved.
///
/// Only `data` changes after construction; everything else is fixed for the
/// lifetime of a chart instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub min: f64,
    pub max: f64,
    pub baseline: Option<f64>,
    pub thresholds: Option<Thresholds>,
    pub show_colored_thresholds: bool,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub show_tooltip: bool,
    pub data: Vec<DataPoint>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            baseline: None,
            thresholds: None,
            show_colored_thresholds: false,
            show_x_axis: false,
            show_y_axis: false,
            show_tooltip: false,
            data: Vec::new(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    #[must_use]
    pub fn with_colored_thresholds(mut self, show: bool) -> Self {
        self.show_colored_thresholds = show;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, show: bool) -> Self {
        self.show_x_axis = show;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, show: bool) -> Self {
        self.show_y_axis = show;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<DataPoint>) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn layout_input(&self) -> LayoutInput {
        LayoutInput {
            viewport: self.viewport(),
            min: self.min,
            max: self.max,
            show_x_axis: self.show_x_axis,
            show_y_axis: self.show_y_axis,
        }
    }
}
