use column_chart::core::{ChartGeometry, LayoutInput, Viewport, column_width, font_size, nice_ticks};
use proptest::prelude::*;

proptest! {
    #[test]
    fn font_size_has_a_floor(width in 0.0f64..500.0) {
        let size = font_size(width);
        prop_assert!(size >= 9.0);
        if width >= 15.0 {
            prop_assert!((size - width * 0.6).abs() <= 1e-9);
        }
    }

    #[test]
    fn column_width_is_capped_and_non_increasing(
        width in 1u32..4_000,
        num_cols in 1usize..200,
        show_y_axis in any::<bool>(),
    ) {
        let current = column_width(width, num_cols, 100.0, 0.0, show_y_axis);
        let next = column_width(width, num_cols + 1, 100.0, 0.0, show_y_axis);
        prop_assert!(current <= 20.0);
        prop_assert!(current >= 0.0);
        prop_assert!(next <= current);
    }

    #[test]
    fn value_rows_stay_inside_plot(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        factor in 0.0f64..=1.0,
        num_cols in 0usize..50,
    ) {
        let input = LayoutInput {
            viewport: Viewport::new(320, 160),
            min,
            max: min + span,
            show_x_axis: true,
            show_y_axis: true,
        };
        let geometry = ChartGeometry::compute(input, num_cols).expect("geometry");
        let row = geometry.value_row(min + factor * span);
        prop_assert!(row >= geometry.plot_top() - 1e-6);
        prop_assert!(row <= geometry.plot_bottom() + 1e-6);
    }

    #[test]
    fn ticks_stay_within_domain(min in -1_000.0f64..1_000.0, span in 0.01f64..1_000.0, count in 1.0f64..20.0) {
        let max = min + span;
        let ticks = nice_ticks(min, max, count);
        prop_assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for tick in ticks {
            prop_assert!(tick >= min - 1e-9 && tick <= max + 1e-9);
        }
    }
}
