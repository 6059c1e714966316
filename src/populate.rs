use log::debug;

use crate::app_info::AppInfo;
use crate::prefs::{UrlFormatter, PREF_RELEASE_NOTES_URL, PREF_VENDOR_URL, UNSET_URL};
use crate::surface::{Slot, Surface};

// Version series that uses parity-release numbering
const PARITY_SERIES_PREFIX: &str = "45.";

// 45.9 was the last pre-parity release, so feature counting starts past it
const PARITY_BASELINE: i64 = 9;

/// Fills the about-dialog slots from the injected collaborators.
///
/// Runs once per window. The four steps are independent and none of them
/// can fail; a step whose input is absent simply leaves its slot at the
/// default state.
pub struct AboutPanelPopulator<F, A> {
    formatter: F,
    app_info: A,
    fixed_version_label: Option<String>,
}

impl<F: UrlFormatter, A: AppInfo> AboutPanelPopulator<F, A> {
    /// `fixed_version_label` forces the version slot to a constant string,
    /// shadowing the parity/default formatting entirely.
    pub fn new(formatter: F, app_info: A, fixed_version_label: Option<String>) -> Self {
        Self {
            formatter,
            app_info,
            fixed_version_label,
        }
    }

    pub fn populate(&self, surface: &mut dyn Surface) {
        self.apply_release_notes_link(surface);
        self.apply_vendor_link(surface);
        self.apply_version_label(surface);
        self.apply_user_agent(surface);
    }

    // Reveal the release-notes row only when a URL is actually configured
    fn apply_release_notes_link(&self, surface: &mut dyn Surface) {
        let url = self.formatter.format_url_pref(PREF_RELEASE_NOTES_URL);
        if url != UNSET_URL {
            debug!("Release notes link: {}", url);
            surface.set_link_target(Slot::ReleaseNotesLink, &url);
            surface.set_visible(Slot::ReleaseNotesLink, true);
        }
    }

    // The vendor row is always drawn; only its link target is conditional
    fn apply_vendor_link(&self, surface: &mut dyn Surface) {
        let url = self.formatter.format_url_pref(PREF_VENDOR_URL);
        if url != UNSET_URL {
            debug!("Vendor link: {}", url);
            surface.set_link_target(Slot::VendorLink, &url);
        }
    }

    fn apply_version_label(&self, surface: &mut dyn Surface) {
        let version = self.app_info.version();
        if let Some(label) = &self.fixed_version_label {
            surface.set_text(Slot::VersionLabel, label);
        } else if let Some(text) = parity_release_text(&version) {
            surface.set_text(Slot::VersionLabel, &text);
        } else {
            surface.append_text(Slot::VersionLabel, &format!(" {}", version));
        }
    }

    fn apply_user_agent(&self, surface: &mut dyn Surface) {
        let ua = self.app_info.user_agent();
        if !ua.is_empty() {
            surface.append_text(Slot::BuildLabel, &format!(" {}", ua));
        }
    }
}

/// Renders the parity-release form of a `45.x` version number.
///
/// Returns `None` for versions outside the parity series, and for a
/// remainder whose integer part is not a plain decimal; those fall back to
/// the verbatim version label.
pub fn parity_release_text(version: &str) -> Option<String> {
    let rest = version.strip_prefix(PARITY_SERIES_PREFIX)?;

    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (rest, ""),
    };
    let fpr = int_part.parse::<i64>().ok()? - PARITY_BASELINE;

    // The security counter is the first digit after the dot, read off the
    // string itself rather than recovered from float arithmetic
    let spr = frac_part
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0);

    let mut text = format!("Feature Parity Release {}", fpr);
    if spr > 0 {
        text.push_str(&format!(" (Security Parity Release {})", spr));
    }
    text.push_str(&format!(" ({})", version));
    Some(text)
}
