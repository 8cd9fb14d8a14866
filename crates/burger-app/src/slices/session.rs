//! # Session Slice
//!
//! Authentication state consulted by the submission flow and the router
//! guards. Each remote operation (login/register, silent user fetch,
//! profile update, logout) follows the shared pending/fulfilled/rejected
//! lifecycle, but they differ in what a rejection means:
//!
//! - a rejected login leaves the user unauthenticated with the error
//!   recorded for the form to show;
//! - a rejected silent fetch (expired session at startup) just clears
//!   authentication, recording no error;
//! - a rejected update or logout keeps the current authentication.

use crate::model::User;
use store_actor::Slice;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub request: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum SessionCommand {
    /// Login and registration share a lifecycle: both settle into an
    /// authenticated session.
    AuthPending,
    AuthFulfilled(User),
    AuthRejected(String),
    /// The silent session restore at startup.
    FetchUserPending,
    FetchUserFulfilled(User),
    FetchUserRejected,
    UpdatePending,
    UpdateFulfilled(User),
    UpdateRejected(String),
    LogoutPending,
    LogoutFulfilled,
    LogoutRejected(String),
    ResetError,
}

#[derive(Debug, Clone, Default)]
pub struct SessionSlice {
    state: SessionState,
}

impl Slice for SessionSlice {
    type Command = SessionCommand;
    type Snapshot = SessionState;

    fn apply(&mut self, command: SessionCommand) {
        let state = &mut self.state;
        match command {
            SessionCommand::AuthPending => {
                state.request = true;
                state.error = None;
            }
            SessionCommand::AuthFulfilled(user) => {
                state.request = false;
                state.error = None;
                state.user = Some(user);
                state.is_authenticated = true;
            }
            SessionCommand::AuthRejected(message) => {
                state.request = false;
                state.error = Some(message);
                state.is_authenticated = false;
            }
            SessionCommand::FetchUserPending => {
                state.request = true;
            }
            SessionCommand::FetchUserFulfilled(user) => {
                state.request = false;
                state.user = Some(user);
                state.is_authenticated = true;
            }
            SessionCommand::FetchUserRejected => {
                // No stored session; not an error worth surfacing.
                state.request = false;
                state.user = None;
                state.is_authenticated = false;
            }
            SessionCommand::UpdatePending => {
                state.request = true;
                state.error = None;
            }
            SessionCommand::UpdateFulfilled(user) => {
                state.request = false;
                state.error = None;
                state.user = Some(user);
            }
            SessionCommand::UpdateRejected(message) => {
                state.request = false;
                state.error = Some(message);
            }
            SessionCommand::LogoutPending => {
                state.request = true;
                state.error = None;
            }
            SessionCommand::LogoutFulfilled => {
                state.request = false;
                state.error = None;
                state.user = None;
                state.is_authenticated = false;
            }
            SessionCommand::LogoutRejected(message) => {
                state.request = false;
                state.error = Some(message);
            }
            SessionCommand::ResetError => {
                state.error = None;
            }
        }
    }

    fn snapshot(&self) -> SessionState {
        self.state.clone()
    }
}
