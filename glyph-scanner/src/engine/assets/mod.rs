//! Asset types loaded from disk.
//!
//! The typeface description is the only external resource the scanner needs;
//! it is registered with the JSON asset loader and parsed into outlines on demand.

/// Typeface asset, glyph records and outline command parsing.
pub mod typeface;
