use eframe::egui::{self, Color32};

use crate::brush::{parse_color, to_hex};

/// How the user left the color dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogResponse {
    /// Still open, or never opened
    Pending,
    Picked(Color32),
    Cancelled,
}

impl DialogResponse {
    /// The value for `Command::ChooseColor`, or `None` while undecided.
    pub fn into_choice(self) -> Option<Option<Color32>> {
        match self {
            Self::Pending => None,
            Self::Picked(color) => Some(Some(color)),
            Self::Cancelled => Some(None),
        }
    }
}

/// Modal-ish color chooser with a picker and a hex/name field.
#[derive(Debug, Default)]
pub struct ColorDialog {
    open: bool,
    color: Color32,
    text: String,
}

impl ColorDialog {
    pub fn open(&mut self, initial: Color32) {
        self.open = true;
        self.color = initial;
        self.text = to_hex(initial);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogResponse {
        if !self.open {
            return DialogResponse::Pending;
        }

        let mut response = DialogResponse::Pending;
        let mut window_open = true;
        egui::Window::new("Choose Brush Color")
            .collapsible(false)
            .resizable(false)
            .open(&mut window_open)
            .show(ctx, |ui| {
                if egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.color,
                    egui::color_picker::Alpha::Opaque,
                ) {
                    self.text = to_hex(self.color);
                }

                ui.horizontal(|ui| {
                    ui.label("Color:");
                    if ui.text_edit_singleline(&mut self.text).changed() {
                        if let Some(color) = parse_color(&self.text) {
                            self.color = color;
                        }
                    }
                });

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        response = DialogResponse::Picked(self.color);
                    }
                    if ui.button("Cancel").clicked() {
                        response = DialogResponse::Cancelled;
                    }
                });
            });

        // closing the window with its X counts as cancel
        if !window_open {
            response = DialogResponse::Cancelled;
        }
        if response != DialogResponse::Pending {
            self.open = false;
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_into_choice() {
        assert_eq!(DialogResponse::Pending.into_choice(), None);
        assert_eq!(DialogResponse::Cancelled.into_choice(), Some(None));
        assert_eq!(
            DialogResponse::Picked(Color32::RED).into_choice(),
            Some(Some(Color32::RED))
        );
    }

    #[test]
    fn test_closed_dialog_stays_pending() {
        let ctx = egui::Context::default();
        let mut dialog = ColorDialog::default();
        assert_eq!(dialog.show(&ctx), DialogResponse::Pending);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_open_resets_text() {
        let mut dialog = ColorDialog::default();
        dialog.open(Color32::from_rgb(255, 0, 0));
        assert!(dialog.is_open());
        assert_eq!(dialog.text, "#ff0000");
    }
}
