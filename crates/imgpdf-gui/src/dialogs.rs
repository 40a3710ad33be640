use rfd::{MessageButtons, MessageDialog, MessageLevel};

pub fn warning(description: impl Into<String>) {
    show(MessageLevel::Warning, "Warning", description.into());
}

pub fn info(description: impl Into<String>) {
    show(MessageLevel::Info, "Success", description.into());
}

pub fn error(description: impl Into<String>) {
    show(MessageLevel::Error, "Error", description.into());
}

fn show(level: MessageLevel, title: &str, description: String) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
