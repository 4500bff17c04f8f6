//! Build stamp for plan reports
//!
//! `build.rs` exports a build number and UTC compile time. A crate built
//! without the script (rust-analyzer, docs) reports build 0 compiled at
//! "unknown".

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build number as stamped by `build.rs`, kept as text since it is only displayed
pub const BUILD_NUMBER: &str = match option_env!("FUEL_PLANNER_BUILD_NUMBER") {
    Some(s) => s,
    None => "0",
};

/// UTC compile time, `%Y-%m-%dT%H:%M:%SZ`
pub const BUILD_TIMESTAMP: &str = match option_env!("FUEL_PLANNER_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Which planner build produced a report
///
/// Plans depend on the formula constants, so a saved JSON report records
/// the build alongside its numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build: &'static str,
    pub compiled_at: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            build: BUILD_NUMBER,
            compiled_at: BUILD_TIMESTAMP,
        }
    }

    /// "v0.1.0 build 12 (2026-10-18T09:00:00Z)"
    pub fn summary(&self) -> String {
        format!("v{} build {} ({})", self.version, self.build, self.compiled_at)
    }
}

/// One line on stderr so stdout stays clean for the plan
pub fn print_startup_banner() {
    eprintln!("Endurance Fuel Planner {}", BuildInfo::current().summary());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_uses_package_version() {
        let info = BuildInfo::current();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(!info.build.is_empty());
    }

    #[test]
    fn test_summary_format() {
        let info = BuildInfo {
            version: "0.1.0",
            build: "12",
            compiled_at: "2026-10-18T09:00:00Z",
        };
        assert_eq!(info.summary(), "v0.1.0 build 12 (2026-10-18T09:00:00Z)");
    }
}
