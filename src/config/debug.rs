//! Debugging feature flags.

pub struct LogFlags {
    /// Table enumeration on both stores and the resulting intersection.
    pub log_catalog: bool,

    /// Per-interaction pipeline summary (rows loaded / dropped / kept).
    pub log_pipeline: bool,

    /// Anything about handling the selected dataset or range
    pub log_selection: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_catalog: true,
    log_pipeline: true,
    log_selection: false,
    log_performance: false,
};
