//! Left-to-right packing of displayed bodies.
//!
//! A single pass places each disc after a running cursor that starts one
//! gap from the left edge and advances by the disc diameter plus the gap.
//! All bodies share the same vertical center.

use crate::display_list::DisplayedInstance;
use crate::error::Result;
use crate::scale::compute_scale;

/// Viewports shorter than this are not laid out at all.
pub const MIN_RENDER_HEIGHT: f64 = 1.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BodyGeometry {
    pub sequence_id: u64,
    pub center_x: f64,
    pub center_y: f64,
    pub pixel_radius: f64,
}

impl BodyGeometry {
    pub fn left(&self) -> f64 {
        self.center_x - self.pixel_radius
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.pixel_radius
    }
}

/// Dashed connector between two neighbouring discs.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GuideSegment {
    pub from_x: f64,
    pub to_x: f64,
    pub y: f64,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Layout {
    pub scale: f64,
    pub bodies: Vec<BodyGeometry>,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Layout {
    pub fn find(&self, sequence_id: u64) -> Option<&BodyGeometry> {
        self.bodies.iter().find(|b| b.sequence_id == sequence_id)
    }

    pub fn guide_segments(&self) -> Vec<GuideSegment> {
        self.bodies
            .windows(2)
            .map(|pair| GuideSegment {
                from_x: pair[0].right(),
                to_x: pair[1].left(),
                y: pair[0].center_y,
            })
            .collect()
    }
}

pub fn compute_layout(
    instances: &[DisplayedInstance],
    scale: f64,
    viewport_height: f64,
    horizontal_gap: f64,
) -> Layout {
    let center_y = viewport_height / 2.0;
    let mut cursor = horizontal_gap;
    let mut bodies = Vec::with_capacity(instances.len());

    for instance in instances {
        let pixel_diameter = instance.diameter_km * scale;
        let radius = pixel_diameter / 2.0;
        bodies.push(BodyGeometry {
            sequence_id: instance.sequence_id,
            center_x: cursor + radius,
            center_y,
            pixel_radius: radius,
        });
        cursor += pixel_diameter + horizontal_gap;
    }

    Layout {
        scale,
        bodies,
        canvas_width: cursor,
        canvas_height: viewport_height,
    }
}

/// Scale plus layout for one frame. `None` when the viewport is too small
/// to draw into.
pub fn plan_frame(
    instances: &[DisplayedInstance],
    viewport_height: f64,
    horizontal_gap: f64,
) -> Result<Option<Layout>> {
    let scale = compute_scale(instances, viewport_height)?;
    if viewport_height < MIN_RENDER_HEIGHT || scale <= 0.0 {
        return Ok(None);
    }
    Ok(Some(compute_layout(instances, scale, viewport_height, horizontal_gap)))
}
