use eframe::egui;
use imgpdf_async_runtime::{
    Channels, CommandSender, ComposeOptions, PdfCommand, PdfUpdate, UpdateReceiver, send_command,
};
use imgpdf_compose::{ComposeReport, Direction, SUPPORTED_EXTENSIONS};
use std::path::{Path, PathBuf};

use crate::dialogs;
use crate::logger::AppLogger;
use crate::session::Session;
use crate::views::{Action, show_actions, show_drop_zone, show_image_list, show_log_panel};

pub struct ImagesToPdfApp {
    session: Session,
    options: ComposeOptions,
    status: String,

    /// Operation in flight; "Generate PDF" is disabled while set
    progress: Option<String>,

    // Async infrastructure
    command_tx: CommandSender,
    update_rx: UpdateReceiver,

    logger: AppLogger,

    _tokio_handle: tokio::runtime::Handle,
}

impl ImagesToPdfApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let Channels {
            command_tx,
            command_rx,
            update_tx,
            update_rx,
        } = Channels::new();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            session: Session::default(),
            options: ComposeOptions::default(),
            status: String::new(),
            progress: None,
            command_tx,
            update_rx,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn is_busy(&self) -> bool {
        self.progress.is_some()
    }

    fn add_images(&mut self, paths: Vec<PathBuf>) {
        let rejected = self.session.add_paths(paths);
        for path in &rejected {
            log::warn!("Unsupported file format: {}", path.display());
        }
        if let Some(message) = unsupported_files_message(&rejected) {
            dialogs::warning(message);
        }
        self.status = format!("{} image(s) queued", self.session.queue().len());
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        if !dropped.is_empty() {
            self.add_images(dropped);
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                PdfUpdate::Progress { operation } => {
                    self.status = operation.clone();
                    self.progress = Some(operation);
                    ctx.request_repaint();
                }
                PdfUpdate::GenerateComplete { path, report } => {
                    self.progress = None;
                    self.status = format!(
                        "Generated {} page(s) → {}",
                        report.pages_drawn(),
                        path.display()
                    );
                    dialogs::info(completion_message(&path, &report));
                }
                PdfUpdate::OptionsLoaded { options } => {
                    self.options = options;
                    self.status = "Settings loaded".to_string();
                }
                PdfUpdate::OptionsSaved { path } => {
                    self.status = format!("Settings saved to {}", path.display());
                }
                PdfUpdate::Error { message } => {
                    self.progress = None;
                    self.status = format!("Error: {message}");
                    dialogs::error(message);
                }
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SelectImages => {
                if let Some(paths) = rfd::FileDialog::new()
                    .set_title("Select images")
                    .add_filter("Images", SUPPORTED_EXTENSIONS)
                    .pick_files()
                {
                    self.add_images(paths);
                }
            }
            Action::MoveUp => self.session.move_selection(Direction::Up),
            Action::MoveDown => self.session.move_selection(Direction::Down),
            Action::Generate => self.start_generation(),
            Action::SaveSettings => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name("imgpdf_settings.json")
                    .save_file()
                {
                    self.send(PdfCommand::SaveOptions {
                        options: self.options.clone(),
                        path,
                    });
                }
            }
            Action::LoadSettings => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .pick_file()
                {
                    self.send(PdfCommand::LoadOptions { path });
                }
            }
        }
    }

    fn start_generation(&mut self) {
        if self.is_busy() {
            return;
        }

        if self.session.queue().is_empty() {
            dialogs::warning("Please select images first");
            return;
        }

        // Cancelling the save dialog is not an error
        let Some(output_path) = rfd::FileDialog::new()
            .set_title("Save PDF")
            .add_filter("PDF", &["pdf"])
            .set_file_name("images.pdf")
            .save_file()
        else {
            return;
        };

        log::info!(
            "Generating PDF from {} image(s) to {}",
            self.session.queue().len(),
            output_path.display()
        );

        let sent = self.send(PdfCommand::Generate {
            images: self.session.snapshot(),
            options: self.options.clone(),
            output_path,
        });
        if sent {
            self.progress = Some("Generating PDF...".to_string());
            self.status = "Generating PDF...".to_string();
        }
    }

    fn send(&mut self, command: PdfCommand) -> bool {
        match send_command(&self.command_tx, command) {
            Ok(()) => true,
            Err(e) => {
                log::error!("{e}");
                self.status = format!("Error: {e}");
                dialogs::error(e.to_string());
                false
            }
        }
    }
}

/// One warning for a whole drop or pick, instead of a dialog per file
fn unsupported_files_message(rejected: &[PathBuf]) -> Option<String> {
    match rejected {
        [] => None,
        [path] => Some(format!("Unsupported file format: {}", path.display())),
        paths => {
            let mut message = format!("{} files have an unsupported format:", paths.len());
            for path in paths {
                message.push_str(&format!("\n{}", path.display()));
            }
            Some(message)
        }
    }
}

fn completion_message(path: &Path, report: &ComposeReport) -> String {
    let mut message = format!("PDF generated and saved to {}", path.display());
    let skipped = report.skipped_count();
    if skipped > 0 {
        message.push_str(&format!(
            "\n\n{} image(s) could not be read and were skipped:",
            skipped
        ));
        for (path, reason) in report.skipped() {
            message.push_str(&format!("\n{} ({})", path.display(), reason));
        }
    }
    message
}

impl eframe::App for ImagesToPdfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Process all pending updates from worker
        self.process_updates(ctx);

        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if let Some(ref operation) = self.progress {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(operation);
                });
                ctx.request_repaint(); // Keep updating during operations
            } else if !self.status.is_empty() {
                ui.label(&self.status);
            }
            show_log_panel(ui, &self.logger);
        });

        let has_selection = self.session.has_selection();
        let busy = self.is_busy();
        let mut action = None;
        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(5.0);
            action = show_actions(
                ui,
                has_selection,
                busy,
                &mut self.options.allow_empty_document,
            );
            ui.add_space(5.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_drop_zone(ui, hovering);
            ui.add_space(10.0);
            show_image_list(ui, &mut self.session);
        });

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgpdf_compose::{PageOutcome, PageStatus, Placement};

    fn drawn(path: &str) -> PageOutcome {
        PageOutcome {
            path: PathBuf::from(path),
            status: PageStatus::Drawn {
                page_number: 1,
                placement: Placement {
                    x: 0.0,
                    y: 0.0,
                    width: 10.0,
                    height: 10.0,
                },
            },
        }
    }

    #[test]
    fn test_completion_message_names_path() {
        let report = ComposeReport {
            outcomes: vec![drawn("a.png")],
        };
        let message = completion_message(Path::new("/tmp/out.pdf"), &report);
        assert_eq!(message, "PDF generated and saved to /tmp/out.pdf");
    }

    #[test]
    fn test_completion_message_lists_skipped() {
        let report = ComposeReport {
            outcomes: vec![
                drawn("a.png"),
                PageOutcome {
                    path: PathBuf::from("broken.jpg"),
                    status: PageStatus::Skipped {
                        reason: "bad header".to_string(),
                    },
                },
            ],
        };
        let message = completion_message(Path::new("out.pdf"), &report);
        assert!(message.contains("1 image(s) could not be read"));
        assert!(message.contains("broken.jpg (bad header)"));
    }

    #[test]
    fn test_unsupported_files_message() {
        assert_eq!(unsupported_files_message(&[]), None);

        let single = unsupported_files_message(&[PathBuf::from("notes.txt")]);
        assert_eq!(single.as_deref(), Some("Unsupported file format: notes.txt"));

        let several = unsupported_files_message(&[
            PathBuf::from("notes.txt"),
            PathBuf::from("scan.heic"),
            PathBuf::from("doc.pdf"),
        ])
        .unwrap();
        assert!(several.starts_with("3 files have an unsupported format:"));
        assert!(several.contains("\nnotes.txt"));
        assert!(several.contains("\nscan.heic"));
        assert!(several.contains("\ndoc.pdf"));
    }
}
