//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Registers the scanner material, typeface loader and frame orchestrator,
/// and wires state-driven systems.
pub mod app_setup;

/// Application state machine, failure reason and status overlay.
///
/// Moves from loading to running, or to a visible failed state.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
