//! # Session Client
//!
//! Drives the authentication lifecycle against the session gateway. Login
//! and registration share the auth lifecycle; the silent user fetch at
//! startup settles without recording errors.

use crate::gateway::{Credentials, ProfileUpdate, RegisterData, SessionGateway};
use crate::slices::session::{SessionCommand, SessionSlice, SessionState};
use std::sync::Arc;
use store_actor::{SliceClient, StoreError};
use tokio::task::JoinHandle;
use tracing::instrument;

#[derive(Clone)]
pub struct SessionClient {
    slice: SliceClient<SessionSlice>,
    gateway: Arc<dyn SessionGateway>,
}

impl SessionClient {
    pub fn new(slice: SliceClient<SessionSlice>, gateway: Arc<dyn SessionGateway>) -> Self {
        Self { slice, gateway }
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: Credentials) -> Result<JoinHandle<()>, StoreError> {
        self.slice.dispatch(SessionCommand::AuthPending).await?;

        let slice = self.slice.clone();
        let gateway = self.gateway.clone();
        Ok(tokio::spawn(async move {
            let command = match gateway.login(credentials).await {
                Ok(user) => SessionCommand::AuthFulfilled(user),
                Err(e) => SessionCommand::AuthRejected(e.to_string()),
            };
            let _ = slice.dispatch(command).await;
        }))
    }

    #[instrument(skip(self, data), fields(email = %data.email))]
    pub async fn register(&self, data: RegisterData) -> Result<JoinHandle<()>, StoreError> {
        self.slice.dispatch(SessionCommand::AuthPending).await?;

        let slice = self.slice.clone();
        let gateway = self.gateway.clone();
        Ok(tokio::spawn(async move {
            let command = match gateway.register(data).await {
                Ok(user) => SessionCommand::AuthFulfilled(user),
                Err(e) => SessionCommand::AuthRejected(e.to_string()),
            };
            let _ = slice.dispatch(command).await;
        }))
    }

    /// The silent session restore at startup.
    #[instrument(skip(self))]
    pub async fn fetch_user(&self) -> Result<JoinHandle<()>, StoreError> {
        self.slice.dispatch(SessionCommand::FetchUserPending).await?;

        let slice = self.slice.clone();
        let gateway = self.gateway.clone();
        Ok(tokio::spawn(async move {
            let command = match gateway.fetch_user().await {
                Ok(user) => SessionCommand::FetchUserFulfilled(user),
                Err(_) => SessionCommand::FetchUserRejected,
            };
            let _ = slice.dispatch(command).await;
        }))
    }

    #[instrument(skip(self, update))]
    pub async fn update_user(&self, update: ProfileUpdate) -> Result<JoinHandle<()>, StoreError> {
        self.slice.dispatch(SessionCommand::UpdatePending).await?;

        let slice = self.slice.clone();
        let gateway = self.gateway.clone();
        Ok(tokio::spawn(async move {
            let command = match gateway.update_user(update).await {
                Ok(user) => SessionCommand::UpdateFulfilled(user),
                Err(e) => SessionCommand::UpdateRejected(e.to_string()),
            };
            let _ = slice.dispatch(command).await;
        }))
    }

    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<JoinHandle<()>, StoreError> {
        self.slice.dispatch(SessionCommand::LogoutPending).await?;

        let slice = self.slice.clone();
        let gateway = self.gateway.clone();
        Ok(tokio::spawn(async move {
            let command = match gateway.logout().await {
                Ok(()) => SessionCommand::LogoutFulfilled,
                Err(e) => SessionCommand::LogoutRejected(e.to_string()),
            };
            let _ = slice.dispatch(command).await;
        }))
    }

    pub async fn reset_error(&self) -> Result<(), StoreError> {
        self.slice.dispatch(SessionCommand::ResetError).await
    }

    pub async fn snapshot(&self) -> Result<SessionState, StoreError> {
        self.slice.read().await
    }
}
