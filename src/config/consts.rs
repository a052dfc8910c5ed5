// src/config/consts.rs

// Net config
pub const HOST: &str = "www.pdga.com";
pub const USER_AGENT: &str = concat!("pdga_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Extraction defaults
pub const DEFAULT_TOUR_MARKER: &str = "DGPT ";
pub const DEFAULT_DIVISION: &str = "mpo";

// Page structure. The results container id is per-division; see
// RunOptions::results_selector.
pub const STATUS_SELECTOR: &str = ".membership-status a";
pub const UPCOMING_SELECTOR: &str = ".upcoming-events";
pub const PLACE_SELECTOR: &str = ".place";

// Export
pub const DEFAULT_OUT_STEM: &str = "player-stats";
