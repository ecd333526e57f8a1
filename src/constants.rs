pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const SLIDE_INTERVAL: f32 = 5.0;          // Autoplay period of the carousel (seconds)
pub const SLIDE_ANIMATION_DURATION: f32 = 0.5; // Time for a slide to reach its role placement (seconds)

pub const NAV_HEIGHT: f32 = 70.0;             // Height of the fixed navigation bar
pub const NAV_OFFSET: f32 = 100.0;            // A section becomes active this far before its top
pub const COMPACT_NAV_WIDTH: i32 = 900;       // Below this width the tabs collapse behind the hamburger

pub const SCROLL_STEP: f32 = 80.0;            // Pixels per mouse wheel notch
pub const SCROLL_DURATION: f32 = 0.6;         // Smooth scroll duration (seconds)

pub const REVEAL_THRESHOLD: f32 = 0.1;        // Fraction of an element that must be visible
pub const REVEAL_DURATION: f32 = 0.6;         // Fade-in duration once revealed (seconds)

pub const TOAST_ENTER_DELAY: f32 = 0.1;       // Delay before a toast slides in (seconds)
pub const TOAST_SLIDE_DURATION: f32 = 0.3;    // Slide in / out duration (seconds)
pub const TOAST_LIFETIME: f32 = 5.0;          // Auto-dismiss after this long (seconds)
pub const TOAST_OFFSCREEN: f32 = 400.0;       // Horizontal offset of a hidden toast

pub const CURSOR_RING_LAG: f32 = 12.0;        // Ring follow speed (1/s)

pub const TYPE_DELAY: f32 = 0.1;              // Time per typed character (seconds)
pub const DELETE_DELAY: f32 = 0.05;           // Time per deleted character (seconds)
pub const TYPE_HOLD: f32 = 2.0;               // Pause once a phrase is complete (seconds)
pub const TYPE_GAP: f32 = 0.5;                // Pause once a phrase is erased (seconds)
