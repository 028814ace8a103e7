use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Pointer position in chart-local pixels, passed explicitly to every handler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One key/value line of the tooltip table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipRow {
    pub key: String,
    pub value: String,
}

impl TooltipRow {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

pub type TooltipRows = SmallVec<[TooltipRow; 4]>;

/// Floating tooltip box, positioned above and centered on the cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub column: Option<usize>,
    pub title: String,
    pub rows: TooltipRows,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub font_size_px: f64,
    pub line_height_px: f64,
    pub padding_px: f64,
}

impl TooltipState {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Hover bookkeeping for one chart instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    cursor: Option<PointerEvent>,
    tooltip: TooltipState,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(&self) -> Option<PointerEvent> {
        self.cursor
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    #[must_use]
    pub fn hovered_column(&self) -> Option<usize> {
        self.tooltip.column.filter(|_| self.tooltip.visible)
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent, tooltip: TooltipState) {
        self.cursor = Some(event);
        self.tooltip = tooltip;
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.tooltip = TooltipState::hidden();
    }
}
