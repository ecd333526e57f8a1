//! A single-page developer portfolio rendered natively with raylib.
//!
//! The page is a stack of sections (hero, about, projects, contact) under a
//! fixed navigation bar. The projects section is a carousel driven by
//! [`carousel::SlideshowController`]; everything else is small, independent
//! page behavior wired together by [`app::Portfolio`].

pub mod app;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod events;
pub mod form;
pub mod input;
pub mod nav;
pub mod notification;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod state;
pub mod texture_loader;
pub mod theme;
pub mod timer;
pub mod typing;

pub use app::Portfolio;
pub use config::PortfolioConfig;
pub use error::{PortfolioError, Result};
