use eframe::egui;

use crate::session::Session;

/// Numbered queue; clicking an entry toggles its selection
pub fn show_image_list(ui: &mut egui::Ui, session: &mut Session) {
    if session.queue().is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No images selected");
        });
        return;
    }

    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (idx, path) in session.queue().iter().enumerate() {
                let label = format!("{}. {}", idx + 1, path.display());
                if ui
                    .selectable_label(session.is_selected(idx), label)
                    .clicked()
                {
                    clicked = Some(idx);
                }
            }
        });

    if let Some(idx) = clicked {
        session.toggle_selected(idx);
    }
}
