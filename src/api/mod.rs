//! API client modules for external services.
//!
//! One client lives here: the attendance tracker feed. The feed is a public
//! read-only endpoint, so there is no session or credential handling in
//! this layer.

pub mod tracker;

// Re-export the configuration struct for easier access from other modules
pub use tracker::TrackerConfig;
