use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use std::time::Instant;

use crate::form::{FormAction, FormState};
use crate::password::CharClass;

/// Seconds before a copied password is cleared from the clipboard.
const CLIPBOARD_CLEAR_SECONDS: u64 = 30;

/// The main eframe app struct. All form data lives in `form`; the app
/// itself only carries the clipboard auto-clear timer.
pub struct PassForgeApp {
    pub form: FormState,
    pub clipboard_copy_time: Option<Instant>,
}

impl Default for PassForgeApp {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            clipboard_copy_time: None,
        }
    }
}

impl App for PassForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Check clipboard auto-clear
        if let Some(copy_time) = self.clipboard_copy_time {
            if copy_time.elapsed().as_secs() >= CLIPBOARD_CLEAR_SECONDS {
                ctx.copy_text(String::new());
                self.clipboard_copy_time = None;
            }
        }

        // Ctrl+G: Generate password
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::G)) {
            self.dispatch(FormAction::Generate);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Show clipboard countdown if active
            if let Some(copy_time) = self.clipboard_copy_time {
                let remaining = CLIPBOARD_CLEAR_SECONDS.saturating_sub(copy_time.elapsed().as_secs());
                ui.colored_label(
                    Color32::YELLOW,
                    format!("Password copied - clipboard clears in {remaining}s"),
                );
                // Keep the countdown ticking without user input
                ui.ctx().request_repaint_after(std::time::Duration::from_secs(1));
            }

            self.show_form_ui(ui);
        });
    }
}

// ----------------------------------------------------------
// Internal UI Implementation
// ----------------------------------------------------------
impl PassForgeApp {
    /// Route every change through the form reducer.
    fn dispatch(&mut self, action: FormAction) {
        self.form = std::mem::take(&mut self.form).apply(action);
    }

    /// Copy text to clipboard with auto-clear timer
    fn copy_to_clipboard(&mut self, ctx: &egui::Context, text: &str) {
        ctx.copy_text(text.to_string());
        self.clipboard_copy_time = Some(Instant::now());
    }

    fn show_form_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Password Generator").size(24.0));
        });
        ui.separator();

        // Length field with inline validation error
        ui.horizontal(|ui| {
            ui.label("Password Length:");
            let mut length_input = self.form.length_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut length_input)
                    .hint_text("E.g. 8")
                    .desired_width(80.0),
            );
            if response.changed() {
                self.dispatch(FormAction::SetLengthInput(length_input));
            }
        });
        if !self.form.length_input.is_empty() {
            if let Err(e) = self.form.parsed_length() {
                ui.colored_label(Color32::RED, e.to_string());
            }
        }

        ui.add_space(8.0);

        // Toggles for character classes
        self.class_checkbox(ui, CharClass::Lowercase, "Include Lowercase (a-z)");
        self.class_checkbox(ui, CharClass::Uppercase, "Include Uppercase (A-Z)");
        self.class_checkbox(ui, CharClass::Digits, "Include Numbers (0-9)");
        self.class_checkbox(ui, CharClass::Symbols, "Include Symbols (!@#...)");

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let generate = ui.add_enabled(
                self.form.can_generate(),
                egui::Button::new("Generate Password (Ctrl+G)"),
            );
            if generate.clicked() {
                self.dispatch(FormAction::Generate);
            }
            if ui.button("Reset").clicked() {
                self.dispatch(FormAction::Reset);
            }
        });

        if let Some(ref error) = self.form.error {
            ui.colored_label(Color32::RED, error.to_string());
        }

        // Result card, only once something was generated
        if self.form.generated {
            ui.separator();
            ui.group(|ui| {
                ui.colored_label(Color32::GRAY, "Select to copy");
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            RichText::new(&self.form.password).monospace().size(20.0),
                        )
                        .selectable(true),
                    );
                });
                if ui.button("Copy").clicked() {
                    let password = self.form.password.clone();
                    self.copy_to_clipboard(ui.ctx(), &password);
                }
            });
        }
    }

    fn class_checkbox(&mut self, ui: &mut egui::Ui, class: CharClass, label: &str) {
        let mut checked = match class {
            CharClass::Uppercase => self.form.selection.uppercase,
            CharClass::Lowercase => self.form.selection.lowercase,
            CharClass::Digits => self.form.selection.digits,
            CharClass::Symbols => self.form.selection.symbols,
        };
        if ui.checkbox(&mut checked, label).changed() {
            self.dispatch(FormAction::ToggleClass(class));
        }
    }
}
