//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! system events. Actions bridge pure state transformations and effectful
//! operations like hiding the pane or communicating with the worker.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence.

use crate::domain::Evility;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the shim. They
/// represent the boundary between pure state transformations and effectful
/// operations; in particular, [`Action::AddToBuild`] is the selection
/// callback handed to whoever embeds the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin.
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Enables asynchronous operations like dataset loading and preference
    /// writes without blocking the main event loop.
    PostToWorker(WorkerMessage),

    /// Reports that the user picked an enabled row.
    ///
    /// Carries the full record; the shim decides what "add to build" means
    /// (persisting it to the current target's build). Never emitted for
    /// rows locked by exclusivity to another target.
    AddToBuild {
        /// The picked record.
        evility: Evility,
    },
}
