use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::mpsc;

// Re-export types from library crates
pub use imgpdf_compose::{ComposeOptions, ComposeReport};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PdfCommand {
    Generate {
        /// Queue snapshot taken when the user confirmed the save dialog
        images: Vec<PathBuf>,
        options: ComposeOptions,
        output_path: PathBuf,
    },
    LoadOptions {
        path: PathBuf,
    },
    SaveOptions {
        options: ComposeOptions,
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PdfUpdate {
    Progress {
        operation: String,
    },
    GenerateComplete {
        path: PathBuf,
        report: ComposeReport,
    },
    OptionsLoaded {
        options: ComposeOptions,
    },
    OptionsSaved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Background worker has stopped")]
    WorkerStopped,
}

pub type CommandSender = mpsc::UnboundedSender<PdfCommand>;
pub type CommandReceiver = mpsc::UnboundedReceiver<PdfCommand>;
pub type UpdateSender = mpsc::UnboundedSender<PdfUpdate>;
pub type UpdateReceiver = mpsc::UnboundedReceiver<PdfUpdate>;

/// UI-side and worker-side ends of the two channels
pub struct Channels {
    pub command_tx: CommandSender,
    pub command_rx: CommandReceiver,
    pub update_tx: UpdateSender,
    pub update_rx: UpdateReceiver,
}

impl Channels {
    pub fn new() -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        Self {
            command_tx,
            command_rx,
            update_tx,
            update_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

/// Send a command, mapping a closed channel to [`RuntimeError::WorkerStopped`]
pub fn send_command(tx: &CommandSender, command: PdfCommand) -> Result<(), RuntimeError> {
    tx.send(command).map_err(|_| RuntimeError::WorkerStopped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_after_worker_dropped() {
        let channels = Channels::new();
        drop(channels.command_rx);

        let result = send_command(
            &channels.command_tx,
            PdfCommand::LoadOptions {
                path: PathBuf::from("settings.json"),
            },
        );
        assert!(matches!(result, Err(RuntimeError::WorkerStopped)));
    }

    #[test]
    fn test_send_reaches_worker() {
        let mut channels = Channels::new();

        send_command(
            &channels.command_tx,
            PdfCommand::SaveOptions {
                options: ComposeOptions::default(),
                path: PathBuf::from("settings.json"),
            },
        )
        .unwrap();

        assert!(matches!(
            channels.command_rx.try_recv(),
            Ok(PdfCommand::SaveOptions { .. })
        ));
    }
}
