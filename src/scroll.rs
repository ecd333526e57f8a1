use crate::constants::*;

#[derive(Debug, Clone, Copy)]
struct SmoothScroll {
    from: f32,
    to: f32,
    elapsed: f32,
}

/// Vertical scroll position of the page, clamped to the scrollable range.
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: f32,
    max_offset: f32,
    smooth: Option<SmoothScroll>,
}

impl ScrollState {
    pub fn new(page_height: f32, viewport_height: f32) -> Self {
        Self {
            offset: 0.0,
            max_offset: (page_height - viewport_height).max(0.0),
            smooth: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn is_animating(&self) -> bool {
        self.smooth.is_some()
    }

    /// Updates the range after a resize, keeping the offset inside it.
    pub fn set_extent(&mut self, page_height: f32, viewport_height: f32) {
        self.max_offset = (page_height - viewport_height).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Scrolls immediately; cancels any smooth scroll in flight.
    pub fn scroll_by(&mut self, delta: f32) {
        self.smooth = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
    }

    pub fn scroll_to(&mut self, target: f32) {
        let to = target.clamp(0.0, self.max_offset);
        self.smooth = Some(SmoothScroll {
            from: self.offset,
            to,
            elapsed: 0.0,
        });
    }

    pub fn update(&mut self, dt: f32) {
        let Some(smooth) = self.smooth.as_mut() else {
            return;
        };
        smooth.elapsed += dt;
        let t = (smooth.elapsed / SCROLL_DURATION).min(1.0);
        let eased = raylib::ease::cubic_out(t, 0.0, 1.0, 1.0);
        self.offset = smooth.from + (smooth.to - smooth.from) * eased;
        if t >= 1.0 {
            self.offset = smooth.to;
            self.smooth = None;
        }
    }
}
