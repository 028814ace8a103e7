use approx::assert_relative_eq;
use column_chart::api::{BarMode, ChartConfig, ChartStyle, ColumnChart};
use column_chart::core::{DataPoint, Thresholds};
use column_chart::render::{ChartLayer, Color, NullRenderer, RectPrimitive};

fn settled_chart(config: ChartConfig) -> ColumnChart<NullRenderer> {
    let mut chart = ColumnChart::new(NullRenderer::default(), config).expect("chart init");
    chart.render().expect("render");
    chart.settle().expect("settle");
    chart
}

fn bars(chart: &ColumnChart<NullRenderer>) -> Vec<RectPrimitive> {
    chart
        .settled_layer(ChartLayer::Bars)
        .expect("bars layer")
        .rects
        .clone()
}

fn jan_feb() -> Vec<DataPoint> {
    vec![DataPoint::new("Jan", 7.0), DataPoint::new("Feb", 7.5)]
}

#[test]
fn two_default_bars_scale_to_plot_height() {
    let chart = settled_chart(ChartConfig::new(150, 75).with_domain(0.0, 10.0).with_data(jan_feb()));
    let geometry = *chart.geometry();
    let plot_height = geometry.plot_bottom() - geometry.plot_top();
    let bars = bars(&chart);
    let default = ChartStyle::default().palette.default;

    assert_eq!(bars.len(), 2);
    assert_relative_eq!(bars[0].height, 0.7 * plot_height, epsilon = 1e-9);
    assert_relative_eq!(bars[1].height, 0.75 * plot_height, epsilon = 1e-9);
    assert!(bars.iter().all(|bar| bar.fill_color == default));
    assert_relative_eq!(bars[0].x, 0.0);
    assert_relative_eq!(bars[1].x, 125.0);
    assert_relative_eq!(bars[0].width, 20.0);
}

#[test]
fn high_threshold_colors_only_the_bar_above_it() {
    let config = ChartConfig::new(150, 75)
        .with_domain(0.0, 10.0)
        .with_thresholds(Thresholds::default().with_high(7.2).with_very_high(9.0))
        .with_data(jan_feb());
    let chart = settled_chart(config);
    let palette = ChartStyle::default().palette;
    let bars = bars(&chart);

    assert_eq!(bars[0].fill_color, palette.default);
    assert_eq!(bars[1].fill_color, palette.high);

    let thresholds = chart.settled_layer(ChartLayer::Thresholds).expect("thresholds");
    assert_eq!(thresholds.lines.len(), 2);
}

#[test]
fn baseline_bar_below_baseline_extends_down() {
    let config = ChartConfig::new(150, 75)
        .with_domain(0.0, 10.0)
        .with_baseline(5.0)
        .with_data(vec![DataPoint::new("a", 3.0)]);
    let chart = settled_chart(config);
    let geometry = *chart.geometry();
    let bar = bars(&chart)[0];

    assert_eq!(chart.bar_mode(), BarMode::Baseline(5.0));
    assert_relative_eq!(bar.y, geometry.value_row(5.0), epsilon = 1e-9);
    assert_relative_eq!(
        bar.height,
        (geometry.value_row(3.0) - geometry.value_row(5.0)).abs(),
        epsilon = 1e-9
    );
    let baseline = chart.settled_layer(ChartLayer::Baseline).expect("baseline");
    assert_relative_eq!(baseline.lines[0].y1, geometry.value_row(5.0), epsilon = 1e-9);
}

#[test]
fn value_equal_to_baseline_has_no_height() {
    let config = ChartConfig::new(150, 75)
        .with_domain(0.0, 10.0)
        .with_baseline(4.0)
        .with_data(vec![DataPoint::new("a", 4.0)]);
    assert_relative_eq!(bars(&settled_chart(config))[0].height, 0.0, epsilon = 1e-9);
}

#[test]
fn explicit_color_overrides_thresholds_and_bad_colors_are_ignored() {
    let config = ChartConfig::new(150, 75)
        .with_domain(0.0, 10.0)
        .with_thresholds(Thresholds::default().with_high(1.0))
        .with_data(vec![
            DataPoint::new("a", 5.0).with_color("#ff0000"),
            DataPoint::new("b", 5.0).with_color("not-a-color"),
        ]);
    let chart = settled_chart(config);
    let bars = bars(&chart);
    assert_eq!(bars[0].fill_color, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(bars[1].fill_color, ChartStyle::default().palette.high);
}

#[test]
fn axes_reserve_margins_and_emit_labels() {
    let config = ChartConfig::new(300, 150)
        .with_domain(0.0, 100.0)
        .with_x_axis(true)
        .with_y_axis(true)
        .with_data(jan_feb());
    let chart = settled_chart(config);
    let geometry = *chart.geometry();

    // Three label characters ("100") at 10px each are reserved before sizing.
    assert_relative_eq!(geometry.column_width, 20.0);
    assert_relative_eq!(geometry.margins.left, 12.0 * 3.0);
    assert_relative_eq!(geometry.margins.bottom, 1.3 * 12.0, epsilon = 1e-9);

    let x_axis = chart.settled_layer(ChartLayer::XAxis).expect("x axis");
    let labels: Vec<&str> = x_axis.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, ["Jan", "Feb"]);

    let y_axis = chart.settled_layer(ChartLayer::YAxis).expect("y axis");
    assert_eq!(y_axis.texts.first().map(|text| text.text.as_str()), Some("0"));
    assert_eq!(y_axis.texts.last().map(|text| text.text.as_str()), Some("100"));
}

#[test]
fn empty_data_renders_chrome_only() {
    let chart = settled_chart(ChartConfig::new(150, 75).with_x_axis(true));
    assert!(bars(&chart).is_empty());
    assert_eq!(chart.settled_layer(ChartLayer::Borders).expect("borders").lines.len(), 2);
    assert!(chart.renderer().last_frame.is_some());
}

#[test]
fn error_bars_and_references_follow_points() {
    let config = ChartConfig::new(150, 75).with_domain(0.0, 10.0).with_data(vec![
        DataPoint::new("a", 5.0).with_error(4.0, 6.0).with_reference(7.0),
        DataPoint::new("b", 2.0),
    ]);
    let chart = settled_chart(config);
    let geometry = *chart.geometry();

    let errors = chart.settled_layer(ChartLayer::ErrorBars).expect("errors");
    assert_eq!(errors.lines.len(), 6);
    assert_eq!(errors.lines.iter().filter(|line| line.is_visible()).count(), 3);
    let top_cap = errors.lines[1];
    assert_relative_eq!(top_cap.x2 - top_cap.x1, 10.0);

    let references = chart.settled_layer(ChartLayer::References).expect("references");
    assert_relative_eq!(references.lines[0].y1, geometry.value_row(7.0), epsilon = 1e-9);
    assert_relative_eq!(references.lines[0].stroke_width, 2.0);
    assert_relative_eq!(references.lines[1].stroke_width, 0.0);
}
