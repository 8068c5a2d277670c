//! Build stamp shown in the startup banner
//!
//! `build.rs` sets the build number and timestamp at compile time.

/// Build number, bumped on each recompilation
pub const BUILD_NUMBER: &str = match option_env!("COOKBOOK_BUILD_NUMBER") {
    Some(s) => s,
    None => "0",
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("COOKBOOK_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line banner: tool name, version and build stamp
pub fn banner(tool: &str) -> String {
    format!("{} {} (build {}, {})", tool, VERSION, BUILD_NUMBER, BUILD_TIMESTAMP)
}

/// Print the startup banner to stderr
pub fn print_startup_banner(tool: &str) {
    eprintln!("{}", banner(tool));
}
