use tracing::trace;

use crate::error::StoryResult;
use crate::interaction::{HoverKey, HoverTransition};
use crate::render::{ChartCanvas, Renderer, TooltipPrimitive};

use super::StoryController;

impl<R: Renderer> StoryController<R> {
    /// Handles a pointer move in surface coordinates.
    ///
    /// Entering a hover target replaces any visible tooltip; moving off every
    /// target hides it. The frame is only presented again when the hover
    /// state actually changed.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> StoryResult<HoverTransition> {
        let point = self.layout.surface_to_plot(x, y);
        let transition = self
            .hover
            .on_pointer_move(self.canvas.hover_targets(), point);

        match &transition {
            HoverTransition::Unchanged => return Ok(transition),
            HoverTransition::Entered { entered, left } => {
                trace!(
                    cause = %entered.cause,
                    year = entered.year,
                    replaced = left.is_some(),
                    "hover enter"
                );
                match self.tooltip_for(entered, x, y) {
                    Some(tooltip) => self.canvas.show_tooltip(tooltip)?,
                    None => self.canvas.hide_tooltip(),
                }
            }
            HoverTransition::Left(key) => {
                trace!(cause = %key.cause, year = key.year, "hover leave");
                self.canvas.hide_tooltip();
            }
        }
        self.render()?;
        Ok(transition)
    }

    /// Pointer left the drawing surface.
    pub fn on_pointer_leave(&mut self) -> StoryResult<HoverTransition> {
        let transition = self.hover.on_pointer_leave();
        if let HoverTransition::Left(key) = &transition {
            trace!(cause = %key.cause, year = key.year, "hover leave");
            self.canvas.hide_tooltip();
            self.render()?;
        }
        Ok(transition)
    }

    fn tooltip_for(&self, key: &HoverKey, x: f64, y: f64) -> Option<TooltipPrimitive> {
        let target = self
            .canvas
            .hover_targets()
            .iter()
            .rev()
            .find(|target| target.cause == key.cause && target.year == key.year)?;
        let pointer = self.layout.surface_to_plot(x, y);
        Some(TooltipPrimitive {
            anchor: pointer.offset(self.config.tooltip_offset_x, self.config.tooltip_offset_y),
            highlight: target.center,
            accent: self.colors.color(&target.cause),
            heading: target.cause.clone(),
            lines: vec![
                format!("Year: {}", target.year),
                format!("Rate: {}", target.rate),
            ],
        })
    }
}
