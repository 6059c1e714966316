/// Metadata describing the running application build.
///
/// Injected into the populator (and the URL formatter) so tests can
/// substitute a fake without touching compile-time package metadata.
pub trait AppInfo {
    fn name(&self) -> String;
    fn version(&self) -> String;
    fn build_id(&self) -> String;
    fn user_agent(&self) -> String;
}

// App info for the binary this panel ships inside
#[derive(Debug, Copy, Clone, Default)]
pub struct HostAppInfo;

impl AppInfo for HostAppInfo {
    fn name(&self) -> String {
        env!("CARGO_PKG_NAME").to_string()
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn build_id(&self) -> String {
        // Stamped by the release pipeline; local builds carry no identifier
        option_env!("BUILD_ID").unwrap_or("dev").to_string()
    }

    fn user_agent(&self) -> String {
        format!(
            "{}/{} ({} {})",
            self.name(),
            self.version(),
            std::env::consts::OS,
            std::env::consts::ARCH,
        )
    }
}
