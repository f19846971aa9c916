//! GTK4 host for the story: a drawing area plus back/next buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{NavigationState, StoryController};
use crate::render::CairoRenderer;

type SharedController = Rc<RefCell<StoryController<CairoRenderer>>>;

/// Widgets wired to one [`StoryController`].
///
/// The drawing area paints the retained frame through the cairo backend;
/// pointer motion drives hover tooltips and the buttons drive navigation.
/// Button visibility always mirrors [`StoryController::navigation`].
pub struct GtkStoryAdapter {
    controller: SharedController,
    container: gtk::Box,
    drawing_area: gtk::DrawingArea,
    back_button: gtk::Button,
    next_button: gtk::Button,
}

impl GtkStoryAdapter {
    #[must_use]
    pub fn new(controller: StoryController<CairoRenderer>) -> Self {
        let viewport = controller.layout().viewport();
        let controller: SharedController = Rc::new(RefCell::new(controller));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let back_button = gtk::Button::with_label("Back");
        let next_button = gtk::Button::with_label("Next");
        let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        buttons.append(&back_button);
        buttons.append(&next_button);

        let container = gtk::Box::new(gtk::Orientation::Vertical, 8);
        container.append(&drawing_area);
        container.append(&buttons);

        let adapter = Self {
            controller,
            container,
            drawing_area,
            back_button,
            next_button,
        };
        adapter.attach_draw_func();
        adapter.attach_pointer_controller();
        adapter.attach_navigation();
        adapter.sync_navigation();
        adapter
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.container
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn controller(&self) -> SharedController {
        Rc::clone(&self.controller)
    }

    fn sync_navigation(&self) {
        if let Ok(controller) = self.controller.try_borrow() {
            apply_navigation(
                controller.navigation(),
                &self.back_button,
                &self.next_button,
            );
        }
    }

    fn attach_draw_func(&self) {
        let controller = Rc::clone(&self.controller);
        self.drawing_area
            .set_draw_func(move |_area, context, _width, _height| {
                if let Ok(mut story) = controller.try_borrow_mut() {
                    if let Err(err) = story.render_on_cairo_context(context) {
                        warn!(error = %err, "failed to paint story frame");
                    }
                }
            });
    }

    fn attach_pointer_controller(&self) {
        let motion = gtk::EventControllerMotion::new();
        {
            let controller = Rc::clone(&self.controller);
            let drawing_area = self.drawing_area.clone();
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut story) = controller.try_borrow_mut() {
                    if let Err(err) = story.on_pointer_move(x, y) {
                        warn!(error = %err, "pointer move failed");
                    }
                }
                drawing_area.queue_draw();
            });
        }
        {
            let controller = Rc::clone(&self.controller);
            let drawing_area = self.drawing_area.clone();
            motion.connect_leave(move |_| {
                if let Ok(mut story) = controller.try_borrow_mut() {
                    if let Err(err) = story.on_pointer_leave() {
                        warn!(error = %err, "pointer leave failed");
                    }
                }
                drawing_area.queue_draw();
            });
        }
        self.drawing_area.add_controller(motion);
    }

    fn attach_navigation(&self) {
        for forward in [false, true] {
            let button = if forward {
                &self.next_button
            } else {
                &self.back_button
            };
            let controller = Rc::clone(&self.controller);
            let drawing_area = self.drawing_area.clone();
            let back_button = self.back_button.clone();
            let next_button = self.next_button.clone();
            button.connect_clicked(move |_| {
                let Ok(mut story) = controller.try_borrow_mut() else {
                    return;
                };
                let result = if forward {
                    story.on_next()
                } else {
                    story.on_back()
                };
                if let Err(err) = result {
                    warn!(error = %err, "scene transition failed");
                }
                apply_navigation(story.navigation(), &back_button, &next_button);
                drawing_area.queue_draw();
            });
        }
    }
}

fn apply_navigation(state: NavigationState, back: &gtk::Button, next: &gtk::Button) {
    back.set_visible(state.back_visible);
    next.set_visible(state.next_visible);
}
