//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every record the perturbation engine rewrites.
    pub log_mutations: bool,

    /// Log when a highlight starts (and which fields triggered it).
    pub log_highlights: bool,

    /// Log source loading (counts, timings, fallbacks).
    pub log_source: bool,

    /// Log detail-window fetches.
    pub log_details: bool,

    /// Log view / mode switches.
    pub log_selection: bool,
}

pub const DF: LogFlags = LogFlags {
    log_source: true,
    log_selection: true,

    log_details: false,
    log_mutations: false,
    log_highlights: false,
};
