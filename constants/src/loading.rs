/// Retries attempted after the first failed typeface load.
pub const TYPEFACE_LOAD_MAX_RETRIES: u32 = 4;

/// Delay before the first retry; doubles on each further retry.
pub const TYPEFACE_LOAD_RETRY_BASE_SECS: f32 = 0.5;
