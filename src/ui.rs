use crate::surface::{DialogModel, Slot, Surface};
use crate::AboutApp;
use eframe::egui::{self, Ui};

// --- UI Drawing Functions ---

pub(crate) fn draw_about_panel(app: &AboutApp, ui: &mut Ui, ctx: &egui::Context) {
    ui.vertical_centered(|ui| {
        ui.heading(&app.heading);
        ui.separator();

        draw_slot(ui, &app.dialog, Slot::VersionLabel);
        draw_slot(ui, &app.dialog, Slot::BuildLabel);
        ui.add_space(10.0);
        draw_slot(ui, &app.dialog, Slot::VendorLink);
        draw_slot(ui, &app.dialog, Slot::ReleaseNotesLink);

        ui.separator();
        if ui.button("OK").clicked() {
            // Ask eframe to close the window
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

// A slot renders as a hyperlink when a target was set, a plain label
// otherwise; hidden slots take no space at all
fn draw_slot(ui: &mut Ui, dialog: &DialogModel, slot: Slot) {
    if !dialog.is_visible(slot) {
        return;
    }
    match dialog.link_target(slot) {
        Some(url) => {
            ui.hyperlink_to(dialog.text(slot), url);
        }
        None => {
            ui.label(dialog.text(slot));
        }
    }
}
