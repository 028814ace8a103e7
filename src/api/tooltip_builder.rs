use crate::core::{DataPoint, format_number};
use crate::interaction::{PointerEvent, TooltipRow, TooltipState};

use super::ChartStyle;

/// Key/value table shown for one point.
#[must_use]
pub fn tooltip_rows(point: &DataPoint) -> Vec<TooltipRow> {
    let mut rows = vec![TooltipRow::new("value", format_number(point.value))];
    if let Some(reference) = point.reference {
        rows.push(TooltipRow::new("reference", format_number(reference)));
    }
    if let Some(error) = point.error {
        rows.push(TooltipRow::new("error low", format_number(error.low)));
        rows.push(TooltipRow::new("error high", format_number(error.high)));
    }
    rows
}

/// Tooltip for the point under the cursor, centered horizontally on the
/// cursor and sitting `tooltip_offset_px` above it.
///
/// The box size is estimated from character counts; backends draw the title
/// on the first line and one `key: value` row per following line.
#[must_use]
pub fn build_tooltip(
    point: &DataPoint,
    column: usize,
    event: PointerEvent,
    style: &ChartStyle,
) -> TooltipState {
    let rows = tooltip_rows(point);
    let widest = rows
        .iter()
        .map(|row| row.key.chars().count() + 2 + row.value.chars().count())
        .chain(std::iter::once(point.name.chars().count()))
        .max()
        .unwrap_or(0);

    let width = 2.0 * style.tooltip_padding_px + widest as f64 * style.tooltip_char_width_px;
    let height = 2.0 * style.tooltip_padding_px
        + style.tooltip_font_size_px
        + rows.len() as f64 * style.tooltip_line_height_px;

    TooltipState {
        visible: true,
        column: Some(column),
        title: point.name.clone(),
        rows: rows.into_iter().collect(),
        left: event.x - width / 2.0,
        top: event.y - height - style.tooltip_offset_px,
        width,
        height,
        font_size_px: style.tooltip_font_size_px,
        line_height_px: style.tooltip_line_height_px,
        padding_px: style.tooltip_padding_px,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{build_tooltip, tooltip_rows};
    use crate::api::ChartStyle;
    use crate::core::DataPoint;
    use crate::interaction::PointerEvent;

    #[test]
    fn rows_include_optional_fields_only_when_present() {
        assert_eq!(tooltip_rows(&DataPoint::new("a", 1.5)).len(), 1);

        let point = DataPoint::new("a", 0.1 + 0.2)
            .with_reference(2.0)
            .with_error(0.25, 0.5);
        let rows = tooltip_rows(&point);
        let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, ["value", "reference", "error low", "error high"]);
        assert_eq!(rows[0].value, "0.3");
        assert_eq!(rows[3].value, "0.5");
    }

    #[test]
    fn box_sits_above_and_centered_on_cursor() {
        let style = ChartStyle::default();
        let tooltip = build_tooltip(
            &DataPoint::new("Feb", 7.5),
            1,
            PointerEvent::new(100.0, 60.0),
            &style,
        );
        assert!(tooltip.visible);
        assert_eq!(tooltip.column, Some(1));
        assert_eq!(tooltip.title, "Feb");

        // "value: 7.5" is the widest line.
        assert_relative_eq!(tooltip.width, 2.0 * 6.0 + 10.0 * 6.5);
        assert_relative_eq!(tooltip.height, 2.0 * 6.0 + 11.0 + 14.0);
        assert_relative_eq!(tooltip.left + tooltip.width / 2.0, 100.0);
        assert_relative_eq!(tooltip.top + tooltip.height, 50.0);
    }
}
