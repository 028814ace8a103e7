use serde::{Deserialize, Serialize};

/// Scene layers of a column chart, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartLayer {
    Background,
    Bars,
    Thresholds,
    Baseline,
    ErrorBars,
    References,
    Borders,
    XAxis,
    YAxis,
}

impl ChartLayer {
    pub const PAINT_ORDER: [Self; 9] = [
        Self::Background,
        Self::Bars,
        Self::Thresholds,
        Self::Baseline,
        Self::ErrorBars,
        Self::References,
        Self::Borders,
        Self::XAxis,
        Self::YAxis,
    ];

    /// Layers whose content follows the data and animates on update.
    #[must_use]
    pub fn is_data_driven(self) -> bool {
        matches!(self, Self::Bars | Self::ErrorBars | Self::References)
    }
}
