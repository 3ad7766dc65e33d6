use eframe::{egui, glow};
use fast_config::Config;

use crate::config::{self, ConfigData};
use crate::state::{ConverterSession, State};
use crate::{ui, LengthConverter, INITIAL_HEIGHT, INITIAL_WIDTH};

// Implementations specific to App lifecycle and top-level control
impl LengthConverter {
    pub fn new(restore: bool) -> Self {
        let config_path = config::config_path();

        // Keep running without persistence if the file can't be created
        let config = match Config::new(&config_path, ConfigData::default()) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                log::error!("Error creating config file at {}: {}", config_path, e);
                None
            }
        };

        Self::with_config(config, restore)
    }

    pub fn with_config(config: Option<Config<ConfigData>>, restore: bool) -> Self {
        Self {
            state: State::Initialising,
            session: ConverterSession::default(),
            config,
            restore,
        }
    }

    // Initialization logic called once at the start
    pub fn init(&mut self) {
        let saved = self
            .config
            .as_ref()
            .filter(|cfg| self.restore && cfg.data.restore_session)
            .map(|cfg| cfg.data.session.clone());

        if let Some(saved) = saved {
            self.session = ConverterSession::from_saved(&saved);
            log::info!("Restored session (input {:?}).", saved.input_text);
        }

        self.state = State::Running;
        log::info!("Initialization complete. State set to Running.");
    }

    // Graceful shutdown logic
    pub fn shutdown_app(&mut self) {
        log::info!("Shutdown requested.");
        let session = self.session.to_saved();

        if let Some(cfg) = self.config.as_mut() {
            cfg.data.session = session;
            if let Err(e) = cfg.save() {
                log::error!("Failed to save configuration on exit: {}", e);
            } else {
                log::info!("Configuration saved.");
            }
        }
        log::info!("Shutdown complete.");
    }
}

// Main eframe application loop
impl eframe::App for LengthConverter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Resize::default()
                .default_width(INITIAL_WIDTH)
                .default_height(INITIAL_HEIGHT)
                .auto_sized()
                .show(ui, |ui| match self.state {
                    State::Initialising => {
                        ui.centered_and_justified(|ui| {
                            ui.label("Initialising...");
                        });
                        self.init();
                    }
                    State::About => {
                        ui::draw_about_screen(self, ui);
                    }
                    State::Running => {
                        ui::draw_running_state(self, ui);
                    }
                });
        });
    }

    // Called when the application is about to close
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.shutdown_app();
    }
}
