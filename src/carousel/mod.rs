pub mod controller;
pub mod engine;
pub mod slide;

pub use controller::SlideshowController;
pub use engine::{CarouselEngine, CarouselLayout};
pub use slide::{Placement, Slide, SlideContent};
