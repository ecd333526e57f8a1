/// Visual treatment of a slide relative to the current index.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SlideRole {
    Center, // The current slide, shown prominently
    Left,   // The slide before the current one
    Right,  // The slide after the current one
    Hidden, // Everything else
}

impl SlideRole {
    /// Drawing order: larger values are drawn later (on top).
    pub fn z_order(self) -> u8 {
        match self {
            SlideRole::Hidden => 0,
            SlideRole::Left | SlideRole::Right => 1,
            SlideRole::Center => 2,
        }
    }
}
