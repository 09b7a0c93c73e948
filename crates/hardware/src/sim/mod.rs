//! Simulation utilities and program loading.
//!
//! Provides the image loader and the [`Simulator`] façade that pairs a CPU
//! with its configured run settings.

/// Program image loading into simulated memory.
pub mod loader;

/// Configured CPU plus run loop.
pub mod simulator;

pub use self::loader::{load_image, load_image_at};
pub use self::simulator::Simulator;
