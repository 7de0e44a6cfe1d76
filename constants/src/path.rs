/// Typeface description loaded once at startup.
pub const TYPEFACE_PATH: &str = "fonts/scanner_block.typeface.json";

/// Scanning-light surface shader.
pub const GLYPH_SCANNER_SHADER_PATH: &str = "shaders/glyph_scanner.wgsl";
