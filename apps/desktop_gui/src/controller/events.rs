//! Backend-to-UI events.

use client_core::LoadTicket;
use shared::{domain::UserRecord, error::FetchError};

pub enum UiEvent {
    WorkerReady,
    /// The backend worker could not start; carries the diagnostic detail.
    WorkerFailed(String),
    UsersLoaded {
        ticket: LoadTicket,
        result: Result<Vec<UserRecord>, FetchError>,
    },
}
