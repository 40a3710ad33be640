use eframe::egui;

/// Button clicked this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectImages,
    MoveUp,
    MoveDown,
    Generate,
    SaveSettings,
    LoadSettings,
}

pub fn show_actions(
    ui: &mut egui::Ui,
    has_selection: bool,
    busy: bool,
    allow_empty_document: &mut bool,
) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("➕ Select images").clicked() {
            action = Some(Action::SelectImages);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("▲ Move up"))
            .clicked()
        {
            action = Some(Action::MoveUp);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("▼ Move down"))
            .clicked()
        {
            action = Some(Action::MoveDown);
        }
        if ui
            .add_enabled(!busy, egui::Button::new("💾 Generate PDF"))
            .clicked()
        {
            action = Some(Action::Generate);
        }
    });

    ui.horizontal(|ui| {
        ui.checkbox(
            allow_empty_document,
            "Write PDF even if no image could be read",
        );
        if ui.small_button("Save settings…").clicked() {
            action = Some(Action::SaveSettings);
        }
        if ui.small_button("Load settings…").clicked() {
            action = Some(Action::LoadSettings);
        }
    });

    action
}
