use crate::PaintApp;

pub fn gallery_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("gallery_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    if !app.has_thumbnails() {
                        ui.weak("No saved drawings yet");
                        return;
                    }
                    // Oldest first, newest on the right
                    for (texture_id, size, name) in app.thumbnail_textures(ctx) {
                        ui.add(egui::Image::new((texture_id, size))).on_hover_text(name);
                    }
                });
            });
            ui.add_space(4.0);
        });
}
