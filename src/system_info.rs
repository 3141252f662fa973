// src/system_info.rs - Host platform and compiler facts
use sysinfo::System;

/// Raw `rustc --version` line captured by the build script.
pub const RUSTC_VERSION_LINE: &str = env!("RUNTIME_INFO_RUSTC_VERSION");

/// Platform facts gathered from the host at the time of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub os_name: String,
    pub os_version: Option<String>,
    pub arch: String,
    pub rust_version: String,
}

impl SystemInfo {
    /// Query the host for its OS name, kernel version and architecture.
    pub fn detect() -> Self {
        let os_name = System::name().unwrap_or_else(|| {
            tracing::debug!("OS name unavailable, using compile-time target OS");
            std::env::consts::OS.to_string()
        });
        let os_version = System::kernel_version().or_else(System::os_version);
        if os_version.is_none() {
            tracing::debug!("OS version unavailable, omitting it from the platform string");
        }

        Self {
            os_name,
            os_version,
            arch: std::env::consts::ARCH.to_string(),
            rust_version: rust_version(RUSTC_VERSION_LINE).to_string(),
        }
    }

    /// Platform string in the `<os>-<version>-<arch>` shape, e.g. `Linux-6.1.0-x86_64`.
    pub fn platform(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        for part in [Some(self.os_name.as_str()), self.os_version.as_deref(), Some(self.arch.as_str())]
            .into_iter()
            .flatten()
        {
            let part = part.trim();
            if !part.is_empty() {
                parts.push(part);
            }
        }
        if parts.is_empty() {
            return "unknown".to_string();
        }
        parts.join("-").replace(' ', "_")
    }

    /// `<rust version> (<platform>)`
    pub fn descriptor(&self) -> String {
        format!("{} ({})", self.rust_version, self.platform())
    }
}

/// Extract the bare version number from a `rustc --version` line.
///
/// `rustc 1.80.0 (051478957 2024-07-21)` yields `1.80.0`. Anything that does not
/// look like that line is returned trimmed, or `unknown` when blank.
pub fn rust_version(line: &str) -> &str {
    let line = line.trim();
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some("rustc"), Some(version)) => version,
        _ if line.is_empty() => "unknown",
        _ => line,
    }
}
