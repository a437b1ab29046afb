use crate::PaintApp;
use crate::command::Command;
use crate::config::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

pub fn controls_panel(app: &mut PaintApp, ctx: &egui::Context) {
    // Commands are collected here and run once the panel is laid out
    let mut commands = Vec::new();

    egui::TopBottomPanel::bottom("controls_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let brush = *app.editor().brush();

            ui.label("Brush/Eraser Size:");
            let mut size = brush.size();
            if ui
                .add(egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE))
                .changed()
            {
                commands.push(Command::SetBrushSize(size));
            }

            // Current ink color
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, brush.color());

            if ui.button("Choose Color").clicked() {
                app.open_color_dialog();
            }
            if ui.selectable_label(brush.is_eraser(), "Eraser").clicked() {
                commands.push(Command::ToggleEraser);
            }
            // Canvas and gallery actions
            if ui.button("Clear").clicked() {
                commands.push(Command::Clear);
            }
            if ui.button("Save").clicked() {
                commands.push(Command::Save);
            }
            if ui.button("Load").clicked() {
                commands.push(Command::Load);
            }
            if ui.button("Delete").clicked() {
                commands.push(Command::Delete);
            }
        });

        // Last notice, if any
        let mut dismiss = false;
        if let Some(notice) = app.notice() {
            ui.horizontal(|ui| {
                let color = if notice.is_error {
                    ui.visuals().error_fg_color
                } else {
                    ui.visuals().text_color()
                };
                ui.colored_label(color, &notice.text);
                dismiss = ui.small_button("✖").clicked();
            });
        }
        if dismiss {
            app.dismiss_notice();
        }
        ui.add_space(4.0);
    });

    // The color dialog floats above everything
    if let Some(choice) = app.show_color_dialog(ctx).into_choice() {
        commands.push(Command::ChooseColor(choice));
    }

    for command in commands {
        app.execute(command);
    }
}
