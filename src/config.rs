use log::Level;

/// How long the loading screen stays up before the site mounts.
pub const LOAD_DURATION_MS: u32 = 2000;

/// Tick interval shared by the hero tagline and the process walkthrough.
pub const ROTATE_INTERVAL_MS: u32 = 3000;

/// Height of the fixed navbar; smooth scrolling stops this far above a section.
pub const HEADER_HEIGHT: f64 = 80.0;

/// Added to the raw scroll offset before matching it against section extents.
pub const LOOKAHEAD_MARGIN: f64 = 100.0;

/// Navbar switches to its compact style past this offset.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// A section is revealed once its top is above this fraction of the viewport.
pub const REVEAL_RATIO: f64 = 0.85;

/// At most one active-section recomputation per window.
pub const SCROLL_THROTTLE_MS: u32 = 50;

pub const PARTICLE_COUNT: usize = 80;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose section/timer tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
