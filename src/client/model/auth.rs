use dioxus::prelude::*;

use crate::{
    client::{
        api::{auth::get_current_user, token},
        model::error::ApiError,
    },
    model::{
        band::{BandDetailDto, BandRole},
        user::UserDto,
    },
};

/// Global authentication state, provided as context by the root component.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    /// Stores a freshly issued token and marks the user as logged in.
    pub fn log_in(&self, session_token: String, user: UserDto) {
        token::store(&session_token);
        self.set(AuthState::Authenticated(user));
    }

    pub fn log_out(&self) {
        token::clear();
        self.set(AuthState::NotLoggedIn);
    }

    /// Replaces the cached user after a profile change.
    pub fn update_user(&self, user: UserDto) {
        self.set(AuthState::Authenticated(user));
    }

    /// Checks the stored token against `/api/auth/me`.
    ///
    /// A rejected token is discarded; other failures leave it in place.
    pub async fn refresh(&self) {
        if token::load().is_none() {
            self.set(AuthState::NotLoggedIn);
            return;
        }

        let state = match get_current_user().await {
            Ok(current) => AuthState::Authenticated(current.user),
            Err(err) if err.is_unauthorized() => {
                token::clear();
                AuthState::NotLoggedIn
            }
            Err(err) => AuthState::Error(err),
        };

        self.set(state);
    }

    fn set(&self, state: AuthState) {
        let mut inner = self.inner;
        inner.set(state);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    /// User is authenticated
    Authenticated(UserDto),
    /// No stored token, or the token was rejected
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// True once the initial token check has finished, whatever its outcome.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user().map(|u| u.id)
    }

    pub fn is_leader_of(&self, band: &BandDetailDto) -> bool {
        self.user_id().and_then(|id| band.role_of(id)) == Some(BandRole::Leader)
    }
}
