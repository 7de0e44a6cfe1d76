//! Startup loading of the typeface asset.
//!
//! Moves the app from `Loading` to `Running` once the typeface is available
//! and complete, or to `Failed` after the retry budget runs out.

/// Typeface load tracking, retry backoff and glyph coverage validation.
pub mod typeface_loader;
