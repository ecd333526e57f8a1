use crate::error::{PortfolioError, Result};
use crate::state::SlideRole;

/// Circular index over a fixed number of slides.
///
/// The current index is always in `[0, slide_count)`. Roles and the active
/// indicator are derived from it on demand, so there is nothing else to keep
/// in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowController {
    current_index: usize,
    slide_count: usize,
}

impl SlideshowController {
    pub fn new(slide_count: usize) -> Result<Self> {
        if slide_count == 0 {
            return Err(PortfolioError::EmptySlideshow);
        }
        Ok(Self {
            current_index: 0,
            slide_count,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn advance(&mut self) {
        self.current_index = self.next_of(self.current_index);
    }

    pub fn retreat(&mut self) {
        self.current_index = self.previous_of(self.current_index);
    }

    /// Selects a slide directly. Out-of-range indices leave the state as is.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.slide_count {
            return Err(PortfolioError::SlideIndexOutOfRange {
                index,
                count: self.slide_count,
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Role of the slide at `index`.
    ///
    /// With three or fewer slides the neighbours overlap; the precedence is
    /// center, then right, then left.
    pub fn role_of(&self, index: usize) -> SlideRole {
        if index == self.current_index {
            SlideRole::Center
        } else if index == self.next_of(self.current_index) {
            SlideRole::Right
        } else if index == self.previous_of(self.current_index) {
            SlideRole::Left
        } else {
            SlideRole::Hidden
        }
    }

    /// Roles of all slides in order.
    pub fn roles(&self) -> Vec<SlideRole> {
        (0..self.slide_count).map(|i| self.role_of(i)).collect()
    }

    pub fn is_indicator_active(&self, index: usize) -> bool {
        index == self.current_index
    }

    fn next_of(&self, index: usize) -> usize {
        (index + 1) % self.slide_count
    }

    fn previous_of(&self, index: usize) -> usize {
        (index + self.slide_count - 1) % self.slide_count
    }
}
