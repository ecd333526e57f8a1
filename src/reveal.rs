use crate::constants::*;

const REVEAL_RISE: f32 = 30.0;

#[derive(Debug, Clone)]
struct Revealable {
    top: f32,
    height: f32,
    revealed: bool,
    progress: f32,
}

/// One-shot reveal flags for page elements.
///
/// An element is revealed the first time enough of it enters the viewport
/// and stays revealed for the rest of the run.
#[derive(Debug, Default)]
pub struct RevealTracker {
    items: Vec<Revealable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(usize);

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, top: f32, height: f32) -> RevealId {
        self.items.push(Revealable {
            top,
            height,
            revealed: false,
            progress: 0.0,
        });
        RevealId(self.items.len() - 1)
    }

    /// Moves an element after a relayout; its revealed state is kept.
    pub fn relocate(&mut self, id: RevealId, top: f32, height: f32) {
        if let Some(item) = self.items.get_mut(id.0) {
            item.top = top;
            item.height = height;
        }
    }

    pub fn observe(&mut self, viewport_top: f32, viewport_height: f32) {
        let viewport_bottom = viewport_top + viewport_height;
        for (i, item) in self.items.iter_mut().enumerate().filter(|(_, item)| !item.revealed) {
            let visible = (item.top + item.height).min(viewport_bottom) - item.top.max(viewport_top);
            if visible > 0.0 && visible >= item.height * REVEAL_THRESHOLD {
                item.revealed = true;
                tracing::trace!(element = i, "revealed");
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        for item in self.items.iter_mut().filter(|item| item.revealed) {
            item.progress = (item.progress + dt / REVEAL_DURATION).min(1.0);
        }
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.items.get(id.0).is_some_and(|item| item.revealed)
    }

    /// Opacity of the element, 0 until revealed.
    pub fn alpha(&self, id: RevealId) -> f32 {
        self.items.get(id.0).map_or(1.0, |item| eased(item.progress))
    }

    /// Vertical offset of the element while it rises into place.
    pub fn rise(&self, id: RevealId) -> f32 {
        self.items
            .get(id.0)
            .map_or(0.0, |item| REVEAL_RISE * (1.0 - eased(item.progress)))
    }
}

fn eased(t: f32) -> f32 {
    raylib::ease::cubic_out(t, 0.0, 1.0, 1.0)
}
