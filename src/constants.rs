//! Constants used throughout os-config-applier

/// Default output root when `--output` is not given
pub const DEFAULT_OUTPUT_ROOT: &str = "/";

/// Default metadata document written by cloud-init / cfn-init
pub const DEFAULT_METADATA_PATH: &str = "/var/lib/cloud/data/cfn-init-data";

/// Timestamp layout of a log line, e.g. `2024/05/01 09:14:03 AM`
pub const LOG_DATE_FORMAT: &str = "%Y/%m/%d %I:%M:%S %p";

/// Global functions provided by minijinja; never reported as missing metadata keys
pub const ENGINE_GLOBALS: &[&str] = &[
    "range", "dict", "debug", "namespace", "lipsum", "cycler", "joiner",
];

/// How often a running executable template is polled when a timeout is set
pub const EXECUTABLE_POLL_INTERVAL_MS: u64 = 50;

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const INFO: u8 = 0;
    pub const DEBUG: u8 = 1;
    pub const TRACE: u8 = 2;
}
