use eframe::egui;

pub fn show_drop_zone(ui: &mut egui::Ui, hovering: bool) {
    let (fill, stroke) = if hovering {
        (
            ui.visuals().selection.bg_fill.gamma_multiply(0.3),
            ui.visuals().selection.stroke,
        )
    } else {
        (
            ui.visuals().faint_bg_color,
            egui::Stroke::new(2.0, egui::Color32::from_gray(204)),
        )
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                let text = if hovering {
                    "Release to add the images"
                } else {
                    "Drag images here or use the button below to select images"
                };
                ui.label(egui::RichText::new(text).size(16.0));
            });
        });
}
