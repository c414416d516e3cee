//! Application shell and eframe integration.
//!
//! Defines the App struct wrapping a `Session`, the control bar (body
//! selection, add, reset, readouts), the scrollable comparison canvas
//! with drag-to-scroll, and the notice window for rejected adds.

use crate::error::ComparatorError;
use crate::renderer::{build_scene, paint_scene};
use crate::scale::format_diameter_km;
use crate::session::Session;
use eframe::egui;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(10, 12, 30);
const BUILD_LABEL: &str = concat!("v", env!("CARGO_PKG_VERSION"), " ", env!("CELESTIAL_SIZES_GIT_HASH"));

pub struct App {
    pub(crate) session: Session,
    /// Catalog key chosen in the combo box; empty when nothing is chosen.
    pub(crate) selection: String,
    pub(crate) notice: Option<String>,
    pub(crate) shown_readout: String,
}

/// Add fires on the button, or on Enter while the body selector has focus.
pub(crate) fn add_requested(button_clicked: bool, selector_focused: bool, enter_pressed: bool) -> bool {
    button_clicked || (selector_focused && enter_pressed)
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            selection: String::new(),
            notice: None,
            shown_readout: String::new(),
        }
    }

    pub(crate) fn add_selected(&mut self) {
        match self.session.add(&self.selection) {
            Ok(_) => self.selection.clear(),
            Err(ComparatorError::NoSelection) => {
                self.notice = Some("Please select a celestial body first.".to_string());
                self.selection.clear();
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn reset(&mut self) {
        if let Err(e) = self.session.reset() {
            log::error!("reset failed: {e}");
            self.notice = Some(e.to_string());
        }
    }

    /// Copies the session's scale readout into the control bar text.
    /// Returns true when the text changed.
    pub(crate) fn refresh_readout(&mut self) -> bool {
        let readout = self.session.scale_readout().to_string();
        if readout == self.shown_readout {
            return false;
        }
        self.shown_readout = readout;
        true
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        let mut add = false;
        let mut reset = false;

        ui.horizontal(|ui| {
            ui.strong("Celestial size comparison");
            ui.separator();

            let selected_text = self
                .session
                .catalog()
                .lookup(&self.selection)
                .map(|e| e.display_name.clone())
                .unwrap_or_else(|| "Select a body…".to_string());
            let catalog = self.session.catalog();
            let combo = egui::ComboBox::from_id_salt("body_select")
                .selected_text(selected_text)
                .width(220.0)
                .show_ui(ui, |ui| {
                    let mut last_category = "";
                    for entry in catalog.entries() {
                        if entry.category != last_category {
                            if !last_category.is_empty() {
                                ui.separator();
                            }
                            ui.label(egui::RichText::new(&entry.category).small().weak());
                            last_category = entry.category.as_str();
                        }
                        ui.selectable_value(
                            &mut self.selection,
                            entry.key.clone(),
                            format!("{}  ({} km)", entry.display_name, format_diameter_km(entry.diameter_km)),
                        );
                    }
                });
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui.button("Add").clicked();
            add = add_requested(clicked, combo.response.has_focus(), enter);
            if ui.button("Reset").clicked() {
                reset = true;
            }

            ui.separator();
            ui.label(format!("Scale: {}", self.shown_readout));
            ui.separator();
            ui.label(format!("Bodies: {}", self.session.count()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(BUILD_LABEL);
            });
        });

        if add {
            self.add_selected();
        }
        if reset {
            self.reset();
        }
    }

    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let dt = ui.input(|i| i.stable_dt) as f64;

        let layout = self.session.frame(available.y as f64);
        if self.refresh_readout() {
            ui.ctx().request_repaint();
        }
        let Some(layout) = layout else {
            ui.centered_and_justified(|ui| ui.weak("Window too small to draw"));
            return;
        };

        let mut area = egui::ScrollArea::horizontal()
            .id_salt("comparison_canvas")
            .scroll_source(egui::scroll_area::ScrollSource {
                drag: false,
                ..egui::scroll_area::ScrollSource::ALL
            })
            .auto_shrink([false, false]);
        if let Some(offset) = self.session.viewport_mut().tick(dt) {
            area = area.horizontal_scroll_offset(offset as f32);
        }
        if self.session.viewport().is_animating() {
            ui.ctx().request_repaint();
        }

        let session = &self.session;
        let output = area.show(ui, |ui| {
            let size = egui::vec2(layout.canvas_width as f32, layout.canvas_height as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
            let scene = build_scene(&layout, session.instances(), &session.config().label, |text, font_size| {
                painter
                    .layout_no_wrap(text.to_owned(), egui::FontId::proportional(font_size), egui::Color32::WHITE)
                    .size()
                    .x
            });
            paint_scene(&painter, response.rect.min, &scene);
            response
        });

        let response = output.inner;
        let visible_width = output.inner_rect.width() as f64;
        let pointer_inside = ui.rect_contains_pointer(output.inner_rect);
        let viewport = self.session.viewport_mut();
        viewport.observe_offset(output.state.offset.x as f64);

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                viewport.begin_drag(pos.x as f64);
            }
        }
        if response.dragged() && viewport.is_dragging() {
            if let Some(pos) = response.interact_pointer_pos() {
                viewport.drag_to(pos.x as f64);
                ui.ctx().request_repaint();
            }
        }
        if response.drag_stopped() || (viewport.is_dragging() && !pointer_inside) {
            viewport.end_drag();
        }

        if viewport.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        if let Some(id) = viewport.render_pass_completed() {
            if let Some(body) = layout.find(id) {
                viewport.focus_on(body.center_x, visible_width, layout.canvas_width);
                ui.ctx().request_repaint();
            }
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.as_deref() else {
            return;
        };
        let mut close = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        if close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.notice = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.show_controls(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BACKGROUND))
            .show(ctx, |ui| {
                self.show_canvas(ui);
            });

        self.show_notice(ctx);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.session.teardown();
    }
}
