use approx::assert_relative_eq;
use column_chart::api::{ChartConfig, ChartState, ColumnChart};
use column_chart::core::DataPoint;
use column_chart::render::{ChartLayer, NullRenderer};
use column_chart::ChartError;

fn chart(data: Vec<DataPoint>) -> ColumnChart<NullRenderer> {
    let config = ChartConfig::new(150, 75).with_domain(0.0, 10.0).with_data(data);
    ColumnChart::new(NullRenderer::default(), config).expect("chart init")
}

#[test]
fn lifecycle_flow() {
    let mut chart = chart(vec![DataPoint::new("Jan", 7.0)]);
    assert!(matches!(chart.update(Vec::new()), Err(ChartError::NotRendered)));

    chart.render().expect("render");
    assert_eq!(chart.state(), ChartState::Rendered);
    while chart.advance(16.0).expect("advance") {}
    assert!(!chart.is_animating());

    chart.update(vec![DataPoint::new("Jan", 3.0)]).expect("update");
    assert!(chart.is_animating());
    chart.settle().expect("settle");

    chart.dispose().expect("dispose");
    assert_eq!(chart.state(), ChartState::Disposed);
    assert!(chart.renderer().cleared);
    assert!(matches!(chart.update(Vec::new()), Err(ChartError::Disposed)));
    assert!(matches!(chart.render(), Err(ChartError::Disposed)));
}

#[test]
fn render_is_idempotent() {
    let mut chart = chart(vec![DataPoint::new("Jan", 7.0), DataPoint::new("Feb", 2.0)]);
    chart.render().expect("render");
    chart.settle().expect("settle");
    let first = chart.frame();
    chart.render().expect("render again");
    chart.settle().expect("settle");
    assert_eq!(chart.frame(), first);
}

#[test]
fn updating_with_current_data_is_a_visual_no_op() {
    let data = vec![
        DataPoint::new("Jan", 7.0).with_reference(8.0),
        DataPoint::new("Feb", 7.5).with_error(6.5, 8.5),
    ];
    let mut chart = chart(data.clone());
    chart.render().expect("render");
    chart.settle().expect("settle");
    let before = chart.frame();

    chart.update(data).expect("update");
    assert_eq!(chart.frame(), before);
    chart.advance(150.0).expect("advance");
    assert_eq!(chart.frame(), before);
}

#[test]
fn error_bars_animate_with_bars() {
    let mut chart = chart(vec![DataPoint::new("a", 5.0).with_error(4.0, 6.0)]);
    chart.render().expect("render");
    chart.settle().expect("settle");
    let geometry = *chart.geometry();

    chart
        .update(vec![DataPoint::new("a", 5.0).with_error(2.0, 8.0)])
        .expect("update");
    chart.advance(150.0).expect("advance");
    let frame = chart.layered_frame();
    let spine = frame.layer(ChartLayer::ErrorBars).expect("errors").lines[0];
    assert_relative_eq!(spine.y1, geometry.value_row(7.0), epsilon = 1e-9);
    assert_relative_eq!(spine.y2, geometry.value_row(3.0), epsilon = 1e-9);
}

#[test]
fn frames_are_resubmitted_while_animating() {
    let mut chart = chart(vec![DataPoint::new("a", 5.0)]);
    chart.render().expect("render");
    let after_render = chart.renderer().frames_rendered;
    let mut steps = 0;
    while chart.advance(50.0).expect("advance") {
        steps += 1;
    }
    assert_eq!(steps, 5);
    assert_eq!(chart.renderer().frames_rendered, after_render + 6);
}

#[test]
fn changing_length_rebuilds_chrome() {
    let mut chart = chart(vec![DataPoint::new("a", 5.0)]);
    chart.render().expect("render");
    chart.settle().expect("settle");

    chart
        .update(vec![DataPoint::new("a", 5.0), DataPoint::new("b", 6.0), DataPoint::new("c", 7.0)])
        .expect("update");
    assert_relative_eq!(chart.geometry().column_width, 20.0);
    assert_eq!(chart.geometry().num_cols, 3);
    let background = chart.settled_layer(ChartLayer::Background).expect("background");
    assert_eq!(background.rects.len(), 3);
    assert_relative_eq!(background.rects[2].x, 125.0);

    chart.settle().expect("settle");
    let bars = chart.settled_layer(ChartLayer::Bars).expect("bars");
    assert_eq!(bars.rects.len(), 3);
    assert_relative_eq!(bars.rects[1].x, 62.5);
}

#[test]
fn update_during_enter_animation_settles_to_render_geometry() {
    let data = vec![DataPoint::new("Jan", 7.0), DataPoint::new("Feb", 7.5)];
    let mut reference = chart(data.clone());
    reference.render().expect("render");
    reference.settle().expect("settle");

    let mut chart = chart(data.clone());
    chart.render().expect("render");
    chart.advance(100.0).expect("advance");
    chart.update(data).expect("update");
    chart.settle().expect("settle");
    assert_eq!(chart.frame(), reference.frame());
}
