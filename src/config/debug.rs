//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every filter/search mutation with the resulting visible count.
    pub log_filter_changes: bool,

    /// Log fixture decode details at startup.
    pub log_fixture_load: bool,

    /// Warn when a frame takes too long to render.
    pub log_performance: bool,

    /// Log UI state on eframe save/restore.
    pub log_ui_state: bool,
}

pub const DF: LogFlags = LogFlags {
    log_filter_changes: true,
    log_fixture_load: true,

    log_performance: false,
    log_ui_state: false,
};
