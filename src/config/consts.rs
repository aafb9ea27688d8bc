// src/config/consts.rs

// Net config
pub const DEFAULT_SOURCE_URL: &str =
    "https://scp-data.tedivm.com/data/scp/items/content_series-1.json";
pub const USER_AGENT: &str = concat!("scp_csv/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Local store (debug log)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Sampling
pub const DEFAULT_SAMPLE_COUNT: usize = 20;
pub const MAX_GUI_SAMPLE_COUNT: usize = 10_000;

// Export
pub const DEFAULT_OUT_FILE: &str = "data.csv";
pub const CSV_HEADER: [&str; 4] = ["Name", "Class", "Containment", "Description"];
pub const CSV_SEP: char = ',';
