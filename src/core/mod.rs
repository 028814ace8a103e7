pub mod color;
pub mod layout;
pub mod scale;
pub mod ticks;
pub mod types;

pub use color::{ThresholdPalette, point_color, resolve_color};
pub use layout::{
    ChartGeometry, LayoutInput, Margins, column_width, font_size, label_char_count, margins,
    tick_count,
};
pub use scale::LinearScale;
pub use ticks::{format_number, format_tick, nice_ticks, tick_step};
pub use types::{DataPoint, ErrorRange, ThresholdKind, Thresholds, Viewport};
