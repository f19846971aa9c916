use crate::core::ticks::{format_rate_tick, format_year_tick};
use crate::core::{ChartFrame, XScale};
use crate::error::StoryResult;
use crate::render::{Color, LinePrimitive, TextHAlign, TextPrimitive, TextRole, TextVAlign};

pub const AXIS_TICK_SIZE_PX: f64 = 6.0;
pub const AXIS_TICK_PADDING_PX: f64 = 3.0;
pub const AXIS_TICK_FONT_PX: f64 = 10.0;
pub const AXIS_LABEL_FONT_PX: f64 = 12.0;
pub const TITLE_FONT_PX: f64 = 16.0;
const AXIS_STROKE_PX: f64 = 1.0;

/// Primitives for the left (rate) and bottom (year or cause) axes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisPrimitives {
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

fn axis_line(x1: f64, y1: f64, x2: f64, y2: f64) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_PX, Color::BLACK)
}

/// Builds both axes, their tick labels and the two axis titles.
pub fn build_axes(
    frame: &ChartFrame,
    x_label: &str,
    y_label: &str,
    tick_count: usize,
) -> StoryResult<AxisPrimitives> {
    let layout = frame.layout();
    let width = layout.plot_width();
    let height = layout.plot_height();
    let margins = layout.margins();
    let mut axes = AxisPrimitives::default();

    // Left axis: domain line with outer ticks, then inner ticks.
    let y_scale = frame.y();
    axes.lines.push(axis_line(0.0, 0.0, 0.0, height));
    axes.lines.push(axis_line(-AXIS_TICK_SIZE_PX, 0.0, 0.0, 0.0));
    axes.lines.push(axis_line(-AXIS_TICK_SIZE_PX, height, 0.0, height));
    let step = y_scale.tick_step(tick_count);
    for value in y_scale.ticks(tick_count) {
        let y = y_scale.map(value)?;
        axes.lines.push(axis_line(-AXIS_TICK_SIZE_PX, y, 0.0, y));
        axes.texts.push(
            TextPrimitive::new(
                format_rate_tick(value, step),
                -(AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX),
                y,
                AXIS_TICK_FONT_PX,
                Color::BLACK,
                TextHAlign::Right,
            )
            .with_v_align(TextVAlign::Middle)
            .with_role(TextRole::TickLabel),
        );
    }

    // Bottom axis.
    axes.lines.push(axis_line(0.0, height, width, height));
    axes.lines.push(axis_line(0.0, height, 0.0, height + AXIS_TICK_SIZE_PX));
    axes.lines.push(axis_line(width, height, width, height + AXIS_TICK_SIZE_PX));
    let ticks: Vec<(f64, String)> = match frame.x() {
        XScale::Linear(scale) => scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| -> StoryResult<(f64, String)> {
                Ok((scale.map(value)?, format_year_tick(value)))
            })
            .collect::<StoryResult<_>>()?,
        XScale::Band(scale) => scale
            .domain()
            .filter_map(|category| {
                scale
                    .center(category)
                    .map(|center| (center, category.to_owned()))
            })
            .collect(),
    };
    for (x, label) in ticks {
        axes.lines.push(axis_line(x, height, x, height + AXIS_TICK_SIZE_PX));
        axes.texts.push(
            TextPrimitive::new(
                label,
                x,
                height + AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX,
                AXIS_TICK_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Top)
            .with_role(TextRole::TickLabel),
        );
    }

    if !x_label.is_empty() {
        axes.texts.push(
            TextPrimitive::new(
                x_label,
                width / 2.0,
                height + margins.bottom - 10.0,
                AXIS_LABEL_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_role(TextRole::AxisLabel),
        );
    }
    if !y_label.is_empty() {
        axes.texts.push(
            TextPrimitive::new(
                y_label,
                -margins.left + 20.0,
                height / 2.0,
                AXIS_LABEL_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            )
            .rotated(-90.0)
            .with_role(TextRole::AxisLabel),
        );
    }

    Ok(axes)
}

#[cfg(test)]
mod tests {
    use super::build_axes;
    use crate::core::{ChartFrame, MortalityRecord, PlotLayout, ScaleMode, ScaleTuning};
    use crate::render::TextRole;

    #[test]
    fn year_axis_labels_are_plain_integers() {
        let records = vec![
            MortalityRecord::new(1900, "Cancer", 80.0),
            MortalityRecord::new(2017, "Cancer", 1500.0),
        ];
        let frame = ChartFrame::scales(
            PlotLayout::default(),
            &records,
            ScaleMode::Continuous,
            ScaleTuning::default(),
        )
        .expect("frame");
        let axes = build_axes(&frame, "Year", "Rate", 10).expect("axes");

        let tick_labels: Vec<&str> = axes
            .texts
            .iter()
            .filter(|text| text.role == TextRole::TickLabel)
            .map(|text| text.text.as_str())
            .collect();
        assert!(tick_labels.contains(&"1960"));
        assert!(tick_labels.contains(&"1,400"));
        assert!(!tick_labels.iter().any(|label| label.contains("1,9")));
    }
}
