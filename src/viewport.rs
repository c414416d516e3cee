//! Horizontal scroll state for the comparison canvas.
//!
//! Two things move the scroll offset: centering a freshly added body once
//! the frame that contains it has been drawn, and pointer dragging. Neither
//! feeds back into scale or layout.

#[derive(Clone, Copy, PartialEq, Debug)]
struct PendingFocus {
    sequence_id: u64,
    passes_remaining: u32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct ScrollAnimation {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
}

impl ScrollAnimation {
    fn offset(&self) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct DragState {
    start_pointer_x: f64,
    start_offset: f64,
}

/// Offset that puts `center_x` in the middle of a `visible_width` window,
/// kept inside the scrollable range of a `content_width` canvas.
pub fn centered_offset(center_x: f64, visible_width: f64, content_width: f64) -> f64 {
    let max_offset = (content_width - visible_width).max(0.0);
    (center_x - visible_width / 2.0).clamp(0.0, max_offset)
}

#[derive(Clone, Debug)]
pub struct ViewportController {
    offset: f64,
    pending_focus: Option<PendingFocus>,
    animation: Option<ScrollAnimation>,
    drag: Option<DragState>,
    jump: Option<f64>,
    drag_speed: f64,
    scroll_duration: f64,
}

impl ViewportController {
    pub fn new(drag_speed: f64, scroll_duration: f64) -> Self {
        Self {
            offset: 0.0,
            pending_focus: None,
            animation: None,
            drag: None,
            jump: None,
            drag_speed,
            scroll_duration,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn has_pending_focus(&self) -> bool {
        self.pending_focus.is_some()
    }

    /// Requests centering on `sequence_id` after the next completed render
    /// pass. A later request replaces an earlier one.
    pub fn schedule_focus(&mut self, sequence_id: u64) {
        self.pending_focus = Some(PendingFocus {
            sequence_id,
            passes_remaining: 1,
        });
    }

    /// Back to the origin with nothing pending.
    pub fn reset(&mut self) {
        self.pending_focus = None;
        self.animation = None;
        self.drag = None;
        self.offset = 0.0;
        self.jump = Some(0.0);
    }

    /// Called once a frame has been drawn. Returns the id to center on
    /// when its wait is over.
    pub fn render_pass_completed(&mut self) -> Option<u64> {
        let pending = self.pending_focus.as_mut()?;
        pending.passes_remaining = pending.passes_remaining.saturating_sub(1);
        if pending.passes_remaining > 0 {
            return None;
        }
        let id = pending.sequence_id;
        self.pending_focus = None;
        Some(id)
    }

    /// Starts the centering scroll toward `center_x`.
    pub fn focus_on(&mut self, center_x: f64, visible_width: f64, content_width: f64) {
        let target = centered_offset(center_x, visible_width, content_width);
        self.drag = None;
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            elapsed: 0.0,
            duration: self.scroll_duration,
        });
    }

    /// Records the offset the scroll container actually used this frame.
    pub fn observe_offset(&mut self, offset: f64) {
        if self.drag.is_none() && self.animation.is_none() {
            self.offset = offset;
        }
    }

    /// Advances by `dt` seconds and returns the offset the scroll container
    /// must adopt this frame, if any.
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        if let Some(jump) = self.jump.take() {
            self.offset = jump;
            return Some(jump);
        }
        if self.drag.is_some() {
            return Some(self.offset);
        }
        let animation = self.animation.as_mut()?;
        animation.elapsed += dt.max(0.0);
        let offset = animation.offset();
        if animation.finished() {
            self.animation = None;
        }
        self.offset = offset;
        Some(offset)
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        self.animation = None;
        self.drag = Some(DragState {
            start_pointer_x: pointer_x,
            start_offset: self.offset,
        });
    }

    pub fn drag_to(&mut self, pointer_x: f64) -> Option<f64> {
        let drag = self.drag?;
        let walk = (pointer_x - drag.start_pointer_x) * self.drag_speed;
        self.offset = (drag.start_offset - walk).max(0.0);
        Some(self.offset)
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(2.0, 0.35)
    }
}
