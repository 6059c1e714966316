// Export modules for testing
pub mod app_info;
pub mod config;
pub mod populate;
pub mod prefs;
pub mod state;
pub mod surface;
pub mod ui;

// Re-export the main types
pub use crate::app_info::{AppInfo, HostAppInfo};
pub use crate::config::ConfigData;
pub use crate::populate::AboutPanelPopulator;
pub use crate::prefs::PrefUrlFormatter;
pub use crate::state::State;
pub use crate::surface::DialogModel;

use std::process::exit;

use eframe::egui;

// Constants
pub const PROGRAM_TITLE: &str = "About";
pub const INITIAL_WIDTH: f32 = 420.0;
pub const INITIAL_HEIGHT: f32 = 240.0;

// Version label forced at build time. Build without the `rolling-release`
// feature to get the parity-release formatting instead.
pub const FIXED_VERSION_LABEL: Option<&str> = if cfg!(feature = "rolling-release") {
    Some("Rolling Release")
} else {
    None
};

// Args struct for command line parsing
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Alternate preference file instead of the platform config directory
    #[arg(short, long)]
    pub config: Option<String>,
}

pub use fast_config::Config;

// The main application struct
pub struct AboutApp {
    // State
    pub state: State,

    // Dialog content
    pub heading: String,
    pub dialog: DialogModel,

    // Preferences
    pub config: Config<ConfigData>,
}

impl AboutApp {
    pub fn new(config_path: Option<String>) -> Self {
        // Determine preference file path safely
        let path = config_path.unwrap_or_else(|| {
            let config_dir = dirs::config_dir()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| ".".to_string()); // Fallback to current dir
            format!("{}/about_panel.json", config_dir)
        });

        // Handle potential preference file error
        let config = match Config::new(&path, ConfigData::default()) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("Error opening preference file at {}: {}", path, e);
                exit(1)
            }
        };

        let info = HostAppInfo;
        Self {
            state: State::Initialising,
            heading: format!("About {}", info.name()),
            dialog: DialogModel::new(&info.build_id()),
            config,
        }
    }

    // One-time population of the dialog slots, called after the first frame
    fn init(&mut self) {
        let info = HostAppInfo;
        let formatter = PrefUrlFormatter::new(&self.config.data, &info);
        let populator =
            AboutPanelPopulator::new(formatter, info, FIXED_VERSION_LABEL.map(str::to_string));
        populator.populate(&mut self.dialog);

        self.state = State::Ready;
        log::info!("Dialog populated. State set to Ready.");
    }
}

// Main eframe application loop
impl eframe::App for AboutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.state {
            State::Initialising => {
                // Show a simple "Loading..." message while init runs
                ui.centered_and_justified(|ui| {
                    ui.label("Initialising...");
                });
                // Actual population runs once after this frame
                self.init();
            }
            State::Ready => {
                // Call the UI drawing function from the ui module
                ui::draw_about_panel(self, ui, ctx);
            }
        });
    }
}
