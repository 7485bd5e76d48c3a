//! Worker thread implementation for asynchronous I/O.
//!
//! This module implements the Zellij worker thread interface, handling dataset
//! loading and preference/build storage off the main plugin rendering loop.

use crate::domain::error::{Result, ZevilityError};
use crate::domain::Evility;
use crate::infrastructure::paths;
use crate::storage::backend::Storage;
use crate::storage::JsonStorage;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling I/O operations.
///
/// Runs on a separate thread spawned by Zellij and processes messages sent
/// from the main plugin thread. The storage backend is initialized lazily on
/// first message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct ZevilityWorker {
    /// Storage backend, initialized lazily on first use.
    #[serde(skip)]
    storage: Option<Box<dyn Storage>>,
}

impl ZevilityWorker {
    /// Creates a new worker with an initialized storage backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let path = paths::get_data_dir().join("zevility.json");
        let storage: Box<dyn Storage> = Box::new(JsonStorage::new(path)?);
        Ok(Self {
            storage: Some(storage),
        })
    }

    /// Returns the storage backend, failing if not initialized.
    fn get_storage(&mut self) -> Result<&mut Box<dyn Storage>> {
        self.storage
            .as_mut()
            .ok_or_else(|| ZevilityError::Worker("Storage not initialized".to_string()))
    }

    /// Helper for handling storage operation results with consistent logging.
    fn handle_io_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "worker operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "worker operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadEvilities` message.
    ///
    /// Reads the dataset JSON from the sandbox filesystem and parses it into
    /// records. The file must contain a JSON array of evility objects.
    fn handle_load_evilities(path: &str) -> WorkerResponse {
        let expanded = paths::expand_tilde(path);
        let _span = tracing::debug_span!("worker_load_evilities", path = %expanded).entered();

        Self::handle_io_result("load evilities", load_dataset(&expanded), |evilities| {
            tracing::debug!(record_count = evilities.len(), "dataset loaded");
            WorkerResponse::EvilitiesLoaded { evilities }
        })
    }

    /// Handles the `LoadPreferences` message.
    fn handle_load_preferences(&mut self) -> WorkerResponse {
        Self::handle_io_result(
            "load preferences",
            self.get_storage().and_then(|storage| storage.preferences()),
            |prefs| WorkerResponse::PreferencesLoaded {
                rows_per_page: prefs.rows_per_page,
            },
        )
    }

    /// Handles the `SaveRowsPerPage` message.
    fn handle_save_rows_per_page(&mut self, rows_per_page: i32) -> WorkerResponse {
        Self::handle_io_result(
            "save rows per page",
            self.get_storage()
                .and_then(|storage| storage.set_rows_per_page(rows_per_page)),
            |()| WorkerResponse::RowsPerPageSaved { rows_per_page },
        )
    }

    /// Handles the `AddToBuild` message.
    fn handle_add_to_build(&mut self, target: String, evility_id: u32) -> WorkerResponse {
        Self::handle_io_result(
            "add to build",
            self.get_storage()
                .and_then(|storage| storage.add_to_build(&target, evility_id)),
            |count| WorkerResponse::BuildUpdated { target, count },
        )
    }

    /// Dispatches a deserialized message to its handler.
    fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        match message {
            WorkerMessage::LoadEvilities { path, .. } => Self::handle_load_evilities(&path),
            WorkerMessage::LoadPreferences { .. } => self.handle_load_preferences(),
            WorkerMessage::SaveRowsPerPage { rows_per_page, .. } => {
                self.handle_save_rows_per_page(rows_per_page)
            }
            WorkerMessage::AddToBuild {
                target, evility_id, ..
            } => self.handle_add_to_build(target, evility_id),
        }
    }
}

/// Reads and parses an evility dataset file.
///
/// # Errors
///
/// Returns [`ZevilityError::Io`] when the file cannot be read and
/// [`ZevilityError::Data`] when it is not a JSON array of records.
fn load_dataset(path: &str) -> Result<Vec<Evility>> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| ZevilityError::Data(format!("failed to parse {path}: {e}")))
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring spans
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
///
/// Used to ensure tracing is only set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ZevilityWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Lazy-initializes the storage backend if needed
    /// 3. Deserializes the message payload
    /// 4. Processes the message via `handle_message`
    /// 5. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if self.storage.is_none() {
            match Self::new() {
                Ok(worker) => {
                    self.storage = worker.storage;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize storage");
                    let error_response = WorkerResponse::Error {
                        message: format!("Failed to initialize storage: {e}"),
                    };
                    if let Ok(payload) = serde_json::to_string(&error_response) {
                        post_message_to_plugin(PluginMessage {
                            name: message,
                            payload,
                            worker_name: None,
                        });
                    }
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}
