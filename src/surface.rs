// The four addressable fields of the about dialog
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slot {
    ReleaseNotesLink,
    VendorLink,
    VersionLabel,
    BuildLabel,
}

/// Mutable view of the dialog that the populator writes into.
///
/// Backed by [`DialogModel`] both in production and in tests; the trait
/// exists so the populator never depends on how the slots are rendered.
pub trait Surface {
    fn set_link_target(&mut self, slot: Slot, url: &str);
    fn set_visible(&mut self, slot: Slot, visible: bool);
    fn set_text(&mut self, slot: Slot, text: &str);
    fn append_text(&mut self, slot: Slot, text: &str);
    fn text(&self, slot: Slot) -> &str;
}

// One display field: its label text, optional hyperlink target and
// whether the containing row is drawn at all
#[derive(Debug, Clone)]
pub struct SlotState {
    pub text: String,
    pub link_target: Option<String>,
    pub visible: bool,
}

impl SlotState {
    fn new(text: &str, visible: bool) -> Self {
        Self {
            text: text.to_string(),
            link_target: None,
            visible,
        }
    }
}

// In-memory model of the dialog, rendered by ui.rs
#[derive(Debug, Clone)]
pub struct DialogModel {
    release_notes: SlotState,
    vendor: SlotState,
    version: SlotState,
    build: SlotState,
}

impl DialogModel {
    pub fn new(build_id: &str) -> Self {
        Self {
            // Hidden until a release-notes URL is configured
            release_notes: SlotState::new("Release Notes", false),
            vendor: SlotState::new("Website", true),
            version: SlotState::new("Version", true),
            build: SlotState::new(&format!("Build {}", build_id), true),
        }
    }

    pub fn link_target(&self, slot: Slot) -> Option<&str> {
        self.slot(slot).link_target.as_deref()
    }

    pub fn is_visible(&self, slot: Slot) -> bool {
        self.slot(slot).visible
    }

    fn slot(&self, slot: Slot) -> &SlotState {
        match slot {
            Slot::ReleaseNotesLink => &self.release_notes,
            Slot::VendorLink => &self.vendor,
            Slot::VersionLabel => &self.version,
            Slot::BuildLabel => &self.build,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SlotState {
        match slot {
            Slot::ReleaseNotesLink => &mut self.release_notes,
            Slot::VendorLink => &mut self.vendor,
            Slot::VersionLabel => &mut self.version,
            Slot::BuildLabel => &mut self.build,
        }
    }
}

impl Surface for DialogModel {
    fn set_link_target(&mut self, slot: Slot, url: &str) {
        self.slot_mut(slot).link_target = Some(url.to_string());
    }

    fn set_visible(&mut self, slot: Slot, visible: bool) {
        self.slot_mut(slot).visible = visible;
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        self.slot_mut(slot).text = text.to_string();
    }

    fn append_text(&mut self, slot: Slot, text: &str) {
        self.slot_mut(slot).text.push_str(text);
    }

    fn text(&self, slot: Slot) -> &str {
        &self.slot(slot).text
    }
}
