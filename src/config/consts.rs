// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://kenyu1234.php.xdomain.jp/persony.php";
pub const PLAYER_ID: u32 = 594;
pub const SEASONS: [u32; 4] = [2016, 2017, 2018, 2019];
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Scrape
pub const TABLE_ID: &str = "matchTable1";

// Export
pub const DEFAULT_OUT_DIR: &str = "./data";
pub const DEFAULT_FILE: &str = "fujii.csv";

// Concurrency
pub const WORKERS: usize = 1; // sequential unless asked otherwise
