//! Backend commands queued from UI to backend worker.

use client_core::LoadTicket;

#[derive(Debug)]
pub enum BackendCommand {
    /// Fetch the user list; a newer `LoadUsers` replaces any fetch still running.
    LoadUsers { ticket: LoadTicket },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadUsers { .. } => "load_users",
        }
    }
}
