use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_base() -> &'static str {
    "/assets"
}

pub fn asset_url(path: &str) -> String {
    format!("{}/{}", asset_base(), path.trim_start_matches('/'))
}

/// Duration used when a scroll is started without an explicit one.
pub const DEFAULT_SCROLL_DURATION_MS: f64 = 800.0;

/// Menu clicks animate slightly slower than the default.
pub const NAV_SCROLL_DURATION_MS: f64 = 900.0;

/// Height of the sticky header, subtracted from anchor offsets so the
/// section title is not hidden underneath it.
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// Past this scroll offset the header switches to its compact look.
pub const SCROLLED_THRESHOLD_PX: f64 = 24.0;
