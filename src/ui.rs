use crate::about;
use crate::conversion::{ConversionRule, CONVERSIONS};
use crate::state::State;
use crate::{LengthConverter, INITIAL_WIDTH, PROGRAM_TITLE};
use eframe::egui::{self, Color32, RichText, Ui};

const ERROR_COLOR: Color32 = Color32::from_rgb(255, 0, 0); // Red for invalid input
const RESULT_FONT_SIZE: f32 = 26.0;
const RESULT_CARD_HEIGHT: f32 = 100.0;
const BUTTONS_PER_ROW: usize = 3;

// Keep UI drawing functions associated with LengthConverter
impl LengthConverter {
    // --- Event Handlers (called from draw_running_state) ---

    fn handle_input_changed(&mut self) {
        let text = self.session.input.raw_text.clone();
        self.session.input_changed(&text);
    }

    fn handle_convert(&mut self, rule: &ConversionRule) {
        let result = self.session.convert_with(rule);
        match result.error_message() {
            Some(msg) => log::warn!("{} failed: {}", rule.label, msg),
            None => log::debug!("{} -> {:?}", rule.label, result.value()),
        }
    }
}

// --- UI Drawing Functions ---

pub(crate) fn draw_about_screen(app: &mut LengthConverter, ui: &mut Ui) {
    ui.set_width(INITIAL_WIDTH);
    ui.vertical_centered(|ui| {
        ui.heading(format!("About {}", PROGRAM_TITLE));
        ui.separator();
        for line in about::about() {
            ui.label(line);
        }
        ui.separator();
        if ui.button("OK").clicked() {
            app.state = State::Running;
        }
    });
}

pub(crate) fn draw_running_state(app: &mut LengthConverter, ui: &mut Ui) {
    ui.vertical(|ui| {
        draw_input_section(app, ui);
        ui.add_space(5.0);
        draw_conversion_buttons(app, ui);
        ui.add_space(10.0);
        draw_result_card(app, ui);
        ui.add_space(10.0);
        if ui.button("About").clicked() {
            app.state = State::About;
        }
    });
}

fn draw_input_section(app: &mut LengthConverter, ui: &mut Ui) {
    ui.label("Length to be converted (km)");
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.session.input.raw_text)
                .hint_text("e.g. 2.5")
                .desired_width(INITIAL_WIDTH - 60.0),
        );
        if response.changed() {
            app.handle_input_changed();
        }

        if !app.session.input.is_valid {
            ui.colored_label(ERROR_COLOR, "⚠");
        }
    });
}

// Six buttons, two rows of three, in CONVERSIONS order
fn draw_conversion_buttons(app: &mut LengthConverter, ui: &mut Ui) {
    for row in CONVERSIONS.chunks(BUTTONS_PER_ROW) {
        ui.horizontal(|ui| {
            for rule in row {
                if ui.button(rule.label).clicked() {
                    app.handle_convert(rule);
                }
            }
        });
    }
}

fn draw_result_card(app: &LengthConverter, ui: &mut Ui) {
    let result = app.session.result();
    let text = RichText::new(result.display_text()).size(RESULT_FONT_SIZE);
    let text = if result.error_message().is_some() {
        text.color(ERROR_COLOR)
    } else {
        text
    };

    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(INITIAL_WIDTH - 40.0, RESULT_CARD_HEIGHT));
            ui.centered_and_justified(|ui| {
                ui.label(text);
            });
        });
}
