//! Build metadata stamped in by `build.rs`

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version and build stamp reported by the banner and `toolbank_status`
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_stamp(
            option_env!("TOOLBANK_BUILD_NUMBER"),
            option_env!("TOOLBANK_BUILD_TIMESTAMP"),
        )
    }

    /// Missing or unparseable stamps fall back to build 0 / "unknown"
    fn from_stamp(number: Option<&str>, timestamp: Option<&'static str>) -> Self {
        Self {
            version: VERSION,
            build_number: number.and_then(|n| n.trim().parse().ok()).unwrap_or(0),
            build_timestamp: timestamp.unwrap_or("unknown"),
        }
    }

    fn banner(&self) -> String {
        let rule = "=".repeat(47);
        format!(
            "{rule}\n  ToolBank Health Calculators\n  Version: {} | Build: {}\n  Compiled: {}\n{rule}",
            self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("{}", BuildInfo::current().banner());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_parsing() {
        let info = BuildInfo::from_stamp(Some("42"), Some("2024-01-01T00:00:00Z"));
        assert_eq!(info.build_number, 42);
        assert_eq!(info.build_timestamp, "2024-01-01T00:00:00Z");

        let info = BuildInfo::from_stamp(Some("4x2"), None);
        assert_eq!(info.build_number, 0);
        assert_eq!(info.build_timestamp, "unknown");
    }

    #[test]
    fn test_banner_shows_version_and_build() {
        let banner = BuildInfo::from_stamp(Some("7"), Some("now")).banner();
        assert!(banner.contains(&format!("Version: {} | Build: 7", VERSION)));
        assert!(banner.contains("Compiled: now"));
    }
}
