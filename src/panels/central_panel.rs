use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Fixed-size canvas; the response tells us whether the pointer is really on it
        let canvas_size = app.editor().config().canvas_size();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());

        // Handle input
        app.handle_input(ctx, &response);

        // Render the canvas
        app.paint_canvas(&painter, response.rect);
    });
}
