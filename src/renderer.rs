//! Scene construction and egui painting for the comparison canvas.
//!
//! `build_scene` turns a layout into plain drawing data (discs, labels and
//! guide lines in canvas coordinates) so it can be inspected without a
//! graphics context. `paint_scene` draws that data with an egui painter.
//! Discs are shaded with a radial gradient whose focus sits up and to the
//! left of the center, approximated by a triangle mesh of nested rings.

use crate::color::Rgb;
use crate::config::LabelStyle;
use crate::display_list::DisplayedInstance;
use crate::layout::Layout;
use crate::scale::format_diameter_km;
use eframe::egui;

const HIGHLIGHT_PERCENT: f64 = 40.0;
const SHADE_PERCENT: f64 = 30.0;
const BASE_STOP: f32 = 0.7;
const FOCUS_OFFSET: f32 = 0.3;
const FOCUS_RADIUS: f32 = 0.1;

const SHADOW_OFFSET: egui::Vec2 = egui::Vec2::new(5.0, 5.0);
const SHADOW_BLUR: f32 = 20.0;
const SHADOW_ALPHA: f32 = 0.5;
const SHADOW_STEPS: usize = 8;
const SHADOW_MIN_RADIUS: f32 = 1.0;

const LABEL_ROUNDING: f32 = 4.0;
const SECONDARY_FONT_DROP: f32 = 2.0;
const MIN_SECONDARY_FONT: f32 = 1.0;

const GRADIENT_RINGS: usize = 16;

pub const LABEL_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 179);
pub const LABEL_BORDER: egui::Color32 = egui::Color32::from_rgb(0x4a, 0x90, 0xe2);
pub const NAME_COLOR: egui::Color32 = egui::Color32::WHITE;
pub const DIAMETER_COLOR: egui::Color32 = egui::Color32::from_rgb(0xcc, 0xcc, 0xcc);
pub const CATEGORY_COLOR: egui::Color32 = LABEL_BORDER;
pub const GUIDE_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(22, 43, 68, 77);

#[derive(Clone, Debug, PartialEq)]
pub struct ShadedDisc {
    pub center: egui::Pos2,
    pub radius: f32,
    pub highlight: Rgb,
    pub base: Rgb,
    pub shade: Rgb,
}

impl ShadedDisc {
    pub fn new(center: egui::Pos2, radius: f32, color: Rgb) -> Self {
        Self {
            center,
            radius,
            highlight: color.lighten(HIGHLIGHT_PERCENT),
            base: color,
            shade: color.darken(SHADE_PERCENT),
        }
    }

    /// Center of the innermost gradient circle.
    pub fn focus(&self) -> egui::Pos2 {
        self.center - egui::Vec2::splat(self.radius * FOCUS_OFFSET)
    }

    pub fn focus_radius(&self) -> f32 {
        self.radius * FOCUS_RADIUS
    }

    /// Gradient color at parameter `t`: 0 is the focus circle, 1 the rim.
    pub fn color_at(&self, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        if t <= BASE_STOP {
            self.highlight.lerp(self.base, t / BASE_STOP)
        } else {
            self.base.lerp(self.shade, (t - BASE_STOP) / (1.0 - BASE_STOP))
        }
    }

    fn ring_point(&self, t: f32, angle: f32) -> egui::Pos2 {
        let focus = self.focus();
        let center = focus + (self.center - focus) * t;
        let radius = self.focus_radius() + (self.radius - self.focus_radius()) * t;
        center + egui::Vec2::angled(angle) * radius
    }

    /// Triangle mesh of the shaded disc, shifted by `offset`.
    pub fn mesh(&self, offset: egui::Vec2) -> egui::Mesh {
        let segments = ((self.radius * 0.5) as usize).clamp(24, 128);
        let mut mesh = egui::Mesh::default();

        let focus_color = self.color_at(0.0).to_color32();
        mesh.colored_vertex(self.focus() + offset, focus_color);
        for s in 0..segments {
            let angle = std::f32::consts::TAU * s as f32 / segments as f32;
            mesh.colored_vertex(self.ring_point(0.0, angle) + offset, focus_color);
        }
        for s in 0..segments as u32 {
            mesh.add_triangle(0, 1 + s, 1 + (s + 1) % segments as u32);
        }

        for ring in 1..=GRADIENT_RINGS {
            let t = ring as f32 / GRADIENT_RINGS as f32;
            let color = self.color_at(t).to_color32();
            let inner_start = 1 + (ring as u32 - 1) * segments as u32;
            let outer_start = inner_start + segments as u32;
            for s in 0..segments {
                let angle = std::f32::consts::TAU * s as f32 / segments as f32;
                mesh.colored_vertex(self.ring_point(t, angle) + offset, color);
            }
            for s in 0..segments as u32 {
                let next = (s + 1) % segments as u32;
                mesh.add_triangle(inner_start + s, outer_start + s, outer_start + next);
                mesh.add_triangle(inner_start + s, outer_start + next, inner_start + next);
            }
        }
        mesh
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelLine {
    pub text: String,
    /// Top center of the line.
    pub anchor: egui::Pos2,
    pub font_size: f32,
    pub color: egui::Color32,
    pub bold: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelBox {
    pub rect: egui::Rect,
    pub lines: [LabelLine; 3],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub size: egui::Vec2,
    pub discs: Vec<ShadedDisc>,
    pub labels: Vec<LabelBox>,
    pub guides: Vec<[egui::Pos2; 2]>,
}

pub fn diameter_text(diameter_km: f64) -> String {
    format!("Diameter: {} km", format_diameter_km(diameter_km))
}

/// Builds the drawing data for one frame. `measure` returns the width of
/// a bold line of text at the given font size.
pub fn build_scene(
    layout: &Layout,
    instances: &[DisplayedInstance],
    style: &LabelStyle,
    mut measure: impl FnMut(&str, f32) -> f32,
) -> Scene {
    debug_assert_eq!(layout.bodies.len(), instances.len());

    let mut discs = Vec::with_capacity(instances.len());
    let mut labels = Vec::with_capacity(instances.len());

    for (geometry, instance) in layout.bodies.iter().zip(instances) {
        let center = egui::pos2(geometry.center_x as f32, geometry.center_y as f32);
        let radius = geometry.pixel_radius as f32;
        discs.push(ShadedDisc::new(center, radius, instance.color));

        let font_size = style.font_size(radius);
        let secondary_size = (font_size - SECONDARY_FONT_DROP).max(MIN_SECONDARY_FONT);
        let name = instance.display_name.clone();
        let diameter = diameter_text(instance.diameter_km);
        let category = instance.category.clone();

        let widest = [&name, &diameter, &category]
            .iter()
            .map(|text| measure(text, font_size))
            .fold(0.0_f32, f32::max);
        let box_width = widest + style.padding * 2.0;
        let box_height = font_size * 3.5 + style.padding * 2.0;
        let label_y = center.y + radius + style.offset_below;
        let rect = egui::Rect::from_min_size(
            egui::pos2(center.x - box_width / 2.0, label_y),
            egui::vec2(box_width, box_height),
        );

        let text_top = label_y + style.padding;
        labels.push(LabelBox {
            rect,
            lines: [
                LabelLine {
                    text: name,
                    anchor: egui::pos2(center.x, text_top),
                    font_size,
                    color: NAME_COLOR,
                    bold: true,
                },
                LabelLine {
                    text: diameter,
                    anchor: egui::pos2(center.x, text_top + font_size + 2.0),
                    font_size: secondary_size,
                    color: DIAMETER_COLOR,
                    bold: false,
                },
                LabelLine {
                    text: category,
                    anchor: egui::pos2(center.x, text_top + font_size * 2.0 + 4.0),
                    font_size: secondary_size,
                    color: CATEGORY_COLOR,
                    bold: false,
                },
            ],
        });
    }

    let guides = layout
        .guide_segments()
        .into_iter()
        .map(|g| {
            [
                egui::pos2(g.from_x as f32, g.y as f32),
                egui::pos2(g.to_x as f32, g.y as f32),
            ]
        })
        .collect();

    Scene {
        size: egui::vec2(layout.canvas_width as f32, layout.canvas_height as f32),
        discs,
        labels,
        guides,
    }
}

/// Draws `scene` with its canvas origin at `origin`. Each body is drawn
/// with its label, followed by the guide line joining it to the previous
/// body.
pub fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &Scene) {
    let offset = origin.to_vec2();

    for (i, (disc, label)) in scene.discs.iter().zip(&scene.labels).enumerate() {
        paint_shadow(painter, disc, offset);
        painter.add(egui::Shape::mesh(disc.mesh(offset)));
        paint_label(painter, label, offset);

        if i > 0 {
            if let Some([from, to]) = scene.guides.get(i - 1) {
                painter.extend(egui::Shape::dashed_line(
                    &[*from + offset, *to + offset],
                    egui::Stroke::new(2.0, GUIDE_COLOR),
                    5.0,
                    5.0,
                ));
            }
        }
    }
}

/// Concentric rings standing in for a blurred shadow, as `(radius, alpha)`
/// from the outermost ring inward. Empty below one pixel of radius; the
/// spread never exceeds the disc radius so tiny discs get a faint halo.
pub fn shadow_rings(radius: f32) -> Vec<(f32, u8)> {
    if !(radius >= SHADOW_MIN_RADIUS) {
        return Vec::new();
    }
    let max_spread = (SHADOW_BLUR * 0.5).min(radius);
    let coverage = (radius / (SHADOW_BLUR * 0.5)).min(1.0);
    let alpha = (SHADOW_ALPHA * coverage / SHADOW_STEPS as f32 * 255.0).round() as u8;
    (0..SHADOW_STEPS)
        .map(|step| {
            let spread = max_spread * (1.0 - step as f32 / SHADOW_STEPS as f32);
            (radius + spread, alpha)
        })
        .collect()
}

fn paint_shadow(painter: &egui::Painter, disc: &ShadedDisc, offset: egui::Vec2) {
    let center = disc.center + offset + SHADOW_OFFSET;
    for (radius, alpha) in shadow_rings(disc.radius) {
        painter.circle_filled(center, radius, egui::Color32::from_black_alpha(alpha));
    }
}

fn paint_label(painter: &egui::Painter, label: &LabelBox, offset: egui::Vec2) {
    let rect = label.rect.translate(offset);
    painter.rect_filled(rect, LABEL_ROUNDING, LABEL_FILL);
    painter.rect_stroke(rect, LABEL_ROUNDING, egui::Stroke::new(2.0, LABEL_BORDER), egui::StrokeKind::Middle);

    for line in &label.lines {
        let font = egui::FontId::proportional(line.font_size);
        let anchor = line.anchor + offset;
        painter.text(anchor, egui::Align2::CENTER_TOP, &line.text, font.clone(), line.color);
        if line.bold {
            // egui ships no bold face; overstrike by half a pixel
            painter.text(anchor + egui::vec2(0.5, 0.0), egui::Align2::CENTER_TOP, &line.text, font, line.color);
        }
    }
}
