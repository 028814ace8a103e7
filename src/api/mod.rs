mod axis_scene_builder;
mod background_scene_builder;
mod bar_scene_builder;
mod border_scene_builder;
mod chart;
mod chart_config;
mod chart_style;
mod config_resolver;
mod error_bar_scene_builder;
mod interaction_controller;
mod reference_scene_builder;
pub(crate) mod scene_coordinator;
mod threshold_scene_builder;
mod tooltip_builder;
mod update_coordinator;

pub use axis_scene_builder::{MAX_Y_TICKS, build_x_axis, build_y_axis, y_tick_count};
pub use background_scene_builder::build_column_backgrounds;
pub use bar_scene_builder::{BarMode, build_bar_enter, build_bars, build_baseline};
pub use border_scene_builder::build_borders;
pub use chart::{ChartState, ColumnChart};
pub use chart_config::{ChartConfig, DEFAULT_HEIGHT, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_WIDTH};
pub use chart_style::ChartStyle;
pub use config_resolver::{MAX_DIMENSION_PX, RawChartConfig, parse_data};
pub use error_bar_scene_builder::{
    LINES_PER_ERROR_BAR, build_error_bar_enter, build_error_bars, cap_width,
};
pub use reference_scene_builder::{REFERENCE_OVERHANG_PX, build_reference_enter, build_references};
pub use scene_coordinator::{
    AnimatedLayer, SceneContext, build_data_layers, build_full_scene,
    build_static_layer,
};
pub use threshold_scene_builder::build_thresholds;
pub use tooltip_builder::{build_tooltip, tooltip_rows};
