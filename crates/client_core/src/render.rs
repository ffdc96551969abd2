//! Pure mapping from load state to what the view should show.

use shared::domain::UserRecord;

use crate::controller::LoadState;

pub const LOADING_MESSAGE: &str = "Loading Users...";
pub const ERROR_HEADING: &str = "Error:";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to fetch user data. Please check your internet connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Hidden,
    Loading {
        message: &'static str,
    },
    Error {
        heading: &'static str,
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl From<&UserRecord> for UserCard {
    fn from(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            address: user.address.formatted(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView {
    pub status: StatusView,
    pub cards: Vec<UserCard>,
}

pub fn render(state: &LoadState) -> RenderView {
    match state {
        LoadState::Idle => RenderView {
            status: StatusView::Hidden,
            cards: Vec::new(),
        },
        LoadState::Loading => RenderView {
            status: StatusView::Loading {
                message: LOADING_MESSAGE,
            },
            cards: Vec::new(),
        },
        LoadState::Success(users) => RenderView {
            status: StatusView::Hidden,
            cards: users.iter().map(UserCard::from).collect(),
        },
        LoadState::Error => RenderView {
            status: StatusView::Error {
                heading: ERROR_HEADING,
                message: GENERIC_FAILURE_MESSAGE,
            },
            cards: Vec::new(),
        },
    }
}

/// Plain-text rendering used by terminal front ends.
pub fn render_text(view: &RenderView) -> String {
    let mut out = String::new();
    match view.status {
        StatusView::Hidden => {}
        StatusView::Loading { message } => {
            out.push_str(message);
            out.push('\n');
        }
        StatusView::Error { heading, message } => {
            out.push_str(heading);
            out.push(' ');
            out.push_str(message);
            out.push('\n');
        }
    }
    for (idx, card) in view.cards.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&card.name);
        out.push('\n');
        out.push_str(&card.email);
        out.push('\n');
        out.push_str("Address: ");
        out.push_str(&card.address);
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
