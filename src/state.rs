// Represents the current high-level state of the dialog window
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Initialising, // Window just opened, preferences loaded, slots not yet filled
    Ready,        // Slots populated, showing the dialog
}
