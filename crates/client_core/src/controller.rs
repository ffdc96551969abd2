//! Load/render state machine for the user list.

use shared::{domain::UserRecord, error::FetchError};
use tracing::{error, info, warn};

use crate::{
    render::{render, RenderView},
    UserSource,
};

/// Identifies one load request. Only the most recently issued ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Success(Vec<UserRecord>),
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The ticket was superseded by a newer load; the result was dropped.
    Stale,
}

/// Owns the current load state. A new load request while one is in flight replaces it:
/// the older ticket is invalidated and its completion is discarded.
#[derive(Debug)]
pub struct UserListController {
    state: LoadState,
    next_ticket: u64,
    in_flight: Option<LoadTicket>,
}

impl Default for UserListController {
    fn default() -> Self {
        Self::new()
    }
}

impl UserListController {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            next_ticket: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn view(&self) -> RenderView {
        render(&self.state)
    }

    pub fn in_flight(&self) -> Option<LoadTicket> {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Enters Loading, dropping any rendered cards or status from the previous load.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = LoadTicket(self.next_ticket);
        if let Some(previous) = self.in_flight.replace(ticket) {
            info!(
                superseded = previous.0,
                ticket = ticket.0,
                "users: load replaced in-flight request"
            );
        }
        self.state = LoadState::Loading;
        ticket
    }

    /// User-initiated reload; identical to starting a fresh load.
    pub fn retry(&mut self) -> LoadTicket {
        info!("users: retry requested");
        self.begin_load()
    }

    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<UserRecord>, FetchError>,
    ) -> Completion {
        if self.in_flight != Some(ticket) {
            warn!(ticket = ticket.0, "users: dropping stale load result");
            return Completion::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(users) => {
                info!(ticket = ticket.0, count = users.len(), "users: load succeeded");
                self.state = LoadState::Success(users);
            }
            Err(err) => {
                error!(
                    ticket = ticket.0,
                    kind = err.kind().label(),
                    status = err.status(),
                    error = %err,
                    "users: load failed"
                );
                self.state = LoadState::Error;
            }
        }
        Completion::Applied
    }

    /// Runs one full load cycle against `source`, suspending until it settles.
    pub async fn load_users<S>(&mut self, source: &S) -> &LoadState
    where
        S: UserSource + ?Sized,
    {
        let ticket = self.begin_load();
        let result = source.fetch_users().await;
        self.complete(ticket, result);
        &self.state
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
