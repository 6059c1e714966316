use log::debug;

use crate::app_info::AppInfo;
use crate::config::ConfigData;

// A preference holding this value is treated as not configured
pub const UNSET_URL: &str = "about:blank";

// Preference names read by the populator
pub const PREF_RELEASE_NOTES_URL: &str = "app.releaseNotesURL";
pub const PREF_VENDOR_URL: &str = "app.vendorURL";

/// Read-only view of the preference store that hands out formatted URLs.
pub trait UrlFormatter {
    /// Returns the URL stored under `pref` with `%VAR%` placeholders
    /// expanded, or [`UNSET_URL`] when the preference is unknown or not
    /// configured.
    fn format_url_pref(&self, pref: &str) -> String;
}

// Formatter over the JSON preference file. Takes a snapshot of the pref
// values and the substitution variables up front, so it holds no borrows
// while the dialog is being mutated.
pub struct PrefUrlFormatter {
    release_notes_url: String,
    vendor_url: String,
    vars: Vec<(&'static str, String)>,
}

impl PrefUrlFormatter {
    pub fn new(config: &ConfigData, info: &dyn AppInfo) -> Self {
        Self {
            release_notes_url: config.release_notes_url.clone(),
            vendor_url: config.vendor_url.clone(),
            vars: vec![
                ("%NAME%", info.name()),
                ("%VERSION%", info.version()),
                ("%OS%", std::env::consts::OS.to_string()),
            ],
        }
    }

    fn expand(&self, raw: &str) -> String {
        let mut url = raw.to_string();
        for (var, value) in &self.vars {
            if url.contains(var) {
                url = url.replace(var, value);
            }
        }
        url
    }
}

impl UrlFormatter for PrefUrlFormatter {
    fn format_url_pref(&self, pref: &str) -> String {
        let raw = match pref {
            PREF_RELEASE_NOTES_URL => self.release_notes_url.as_str(),
            PREF_VENDOR_URL => self.vendor_url.as_str(),
            _ => {
                debug!("Unknown URL pref '{}', treating as unset", pref);
                return UNSET_URL.to_string();
            }
        };

        // An empty value means the same thing as the sentinel
        if raw.is_empty() {
            return UNSET_URL.to_string();
        }

        self.expand(raw)
    }
}
