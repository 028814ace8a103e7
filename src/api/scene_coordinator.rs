use crate::core::ChartGeometry;
use crate::render::{ChartLayer, LayerPrimitives, LayeredRenderFrame};

use super::axis_scene_builder::{build_x_axis, build_y_axis};
use super::background_scene_builder::build_column_backgrounds;
use super::bar_scene_builder::{build_bar_enter, build_bars, build_baseline};
use super::border_scene_builder::build_borders;
use super::error_bar_scene_builder::{build_error_bar_enter, build_error_bars};
use super::reference_scene_builder::{build_reference_enter, build_references};
use super::threshold_scene_builder::build_thresholds;
use super::{BarMode, ChartConfig, ChartStyle};

/// Read-only inputs shared by every scene builder.
#[derive(Debug, Clone, Copy)]
pub struct SceneContext<'a> {
    pub config: &'a ChartConfig,
    pub geometry: &'a ChartGeometry,
    pub style: &'a ChartStyle,
}

/// Settled state of an animated layer plus the state new elements enter from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedLayer {
    pub settled: LayerPrimitives,
    pub enter: LayerPrimitives,
}

#[must_use]
pub fn build_static_layer(ctx: &SceneContext<'_>, mode: BarMode, kind: ChartLayer) -> LayerPrimitives {
    match kind {
        ChartLayer::Background => build_column_backgrounds(ctx),
        ChartLayer::Thresholds => build_thresholds(ctx),
        ChartLayer::Baseline => build_baseline(ctx, mode),
        ChartLayer::Borders => build_borders(ctx),
        ChartLayer::XAxis => build_x_axis(ctx),
        ChartLayer::YAxis => build_y_axis(ctx),
        ChartLayer::Bars => build_bars(ctx, mode),
        ChartLayer::ErrorBars => build_error_bars(ctx, mode),
        ChartLayer::References => build_references(ctx, mode),
    }
}

/// Bars, error bars and reference markers with their enter states.
#[must_use]
pub fn build_data_layers(ctx: &SceneContext<'_>, mode: BarMode) -> [AnimatedLayer; 3] {
    [
        AnimatedLayer {
            settled: build_bars(ctx, mode),
            enter: build_bar_enter(ctx, mode),
        },
        AnimatedLayer {
            settled: build_error_bars(ctx, mode),
            enter: build_error_bar_enter(ctx, mode),
        },
        AnimatedLayer {
            settled: build_references(ctx, mode),
            enter: build_reference_enter(ctx, mode),
        },
    ]
}

/// Every layer in its settled state.
#[must_use]
pub fn build_full_scene(ctx: &SceneContext<'_>, mode: BarMode) -> LayeredRenderFrame {
    let mut scene = LayeredRenderFrame::canonical(ctx.geometry.viewport);
    for kind in ChartLayer::PAINT_ORDER {
        scene.replace_layer(build_static_layer(ctx, mode, kind));
    }
    scene
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{BarMode, SceneContext, build_data_layers, build_full_scene};
    use crate::api::{ChartConfig, ChartStyle};
    use crate::core::{ChartGeometry, DataPoint, Thresholds};
    use crate::render::ChartLayer;

    pub(crate) struct SceneFixture {
        pub config: ChartConfig,
        pub geometry: ChartGeometry,
        pub style: ChartStyle,
    }

    impl SceneFixture {
        pub fn context(&self) -> SceneContext<'_> {
            SceneContext {
                config: &self.config,
                geometry: &self.geometry,
                style: &self.style,
            }
        }
    }

    /// 150x75 chart over `[0, 10]` with both axes hidden.
    pub(crate) fn scene_fixture(data: Vec<DataPoint>, baseline: Option<f64>) -> SceneFixture {
        let mut config = ChartConfig::new(150, 75).with_domain(0.0, 10.0).with_data(data);
        config.baseline = baseline;
        scene_fixture_for(config)
    }

    pub(crate) fn scene_fixture_for(config: ChartConfig) -> SceneFixture {
        let geometry = ChartGeometry::compute(config.layout_input(), config.data.len())
            .expect("fixture geometry");
        SceneFixture {
            config,
            geometry,
            style: ChartStyle::default(),
        }
    }

    #[test]
    fn full_scene_fills_every_layer_in_paint_order() {
        let config = ChartConfig::new(150, 75)
            .with_domain(0.0, 10.0)
            .with_baseline(5.0)
            .with_thresholds(Thresholds::default().with_low(2.0))
            .with_x_axis(true)
            .with_y_axis(true)
            .with_data(vec![
                DataPoint::new("Jan", 7.0).with_reference(8.0).with_error(6.0, 8.0),
                DataPoint::new("Feb", 3.0),
            ]);
        let fixture = scene_fixture_for(config);
        let scene = build_full_scene(&fixture.context(), BarMode::Baseline(5.0));

        let kinds: Vec<ChartLayer> = scene.layers.iter().map(|layer| layer.kind).collect();
        assert_eq!(kinds, ChartLayer::PAINT_ORDER);
        assert!(scene.layers.iter().all(|layer| !layer.is_empty()));
        assert!(scene.flatten().validate().is_ok());
    }

    #[test]
    fn data_layers_keep_one_entry_per_point() {
        let fixture = scene_fixture(
            vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0), DataPoint::new("c", 3.0)],
            None,
        );
        let [bars, errors, references] = build_data_layers(&fixture.context(), BarMode::ZeroOrigin);
        assert_eq!(bars.settled.rects.len(), 3);
        assert_eq!(bars.enter.rects.len(), 3);
        assert_eq!(errors.settled.lines.len(), 9);
        assert_eq!(references.settled.lines.len(), 3);
    }
}
