use serde::{Deserialize, Serialize};

use crate::prefs::UNSET_URL;

// Preference data saved to JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigData {
    #[serde(default = "unset_url")] // Ensure field exists even if missing in JSON
    pub release_notes_url: String,
    #[serde(default = "unset_url")]
    pub vendor_url: String,
}

fn unset_url() -> String {
    UNSET_URL.to_string()
}

// Default values for a new preference file: neither URL is configured
impl Default for ConfigData {
    fn default() -> Self {
        Self {
            release_notes_url: unset_url(),
            vendor_url: unset_url(),
        }
    }
}
