//! Host description for the log header

use sysinfo::System;

/// Human-readable operating system name
///
/// Prefers the pretty product name (e.g. "Linux 24.04 Ubuntu", "macOS 14.5
/// Sonoma"), otherwise a generic name for the target OS.
pub fn os_description() -> String {
    System::long_os_version()
        .and_then(non_empty)
        .unwrap_or_else(|| generic_os_name(std::env::consts::OS).to_string())
}

fn non_empty(name: String) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn generic_os_name(os: &str) -> &'static str {
    match os {
        "windows" => "Windows",
        "macos" => "Mac OSX",
        "linux" => "GNU/Linux",
        _ => "Unknown",
    }
}
