//! Session store: the reducer over [`SessionState`].
//!
//! DESIGN
//! ======
//! Every mutation is an [`Action`] applied by [`SessionStore::dispatch`].
//! Request-starting actions hand back a [`RequestId`]; the matching completion
//! must carry it. Only the single pending request may complete, so a late
//! response that lost a race with `Logout` (or with a newer request) is
//! dropped instead of resurrecting a cleared session.
//!
//! Durable storage is written from here and nowhere else.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::error::ApiError;
use crate::guard::GuardContext;
use crate::notify::{Notice, NotificationSink};
use crate::state::SessionState;
use crate::storage::{self, SessionStorage};
use crate::user::User;

/// Tag identifying one in-flight login or hydration request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RequestKind {
    Login,
    Hydrate,
}

/// A state transition request.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    LoginRequest,
    LoginSuccess { request: RequestId, token: String, user: User },
    LoginFailure { request: RequestId, message: String },
    GetMeRequest,
    GetMeSuccess { request: RequestId, user: User },
    GetMeFailure { request: RequestId, error: ApiError },
    Logout,
    Reset,
}

/// What [`SessionStore::dispatch`] did with an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A request was started; the caller performs the I/O and reports back.
    Started(RequestId),
    /// The state changed.
    Applied,
    /// Nothing changed: a stale completion, or a request whose precondition
    /// did not hold at dispatch time.
    Ignored,
}

impl Transition {
    /// Request tag when this transition started one.
    #[must_use]
    pub fn started(self) -> Option<RequestId> {
        match self {
            Self::Started(id) => Some(id),
            Self::Applied | Self::Ignored => None,
        }
    }
}

/// Single source of truth for the logged-in session.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
    last_request: u64,
    pending: Option<(RequestId, RequestKind)>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Empty store over `storage`, without reading it yet.
    pub fn new(storage: S) -> Self {
        Self { state: SessionState::default(), storage, last_request: 0, pending: None }
    }

    /// Build a store rehydrated from whatever `storage` holds.
    pub fn restore(storage: S) -> Self {
        let persisted = storage::load(&storage);
        log::debug!(
            "session restored: token={} user={}",
            persisted.token.is_some(),
            persisted.user.is_some()
        );
        let state = SessionState {
            // A user without a token cannot be trusted; hydration can't fix it either.
            user: persisted.token.as_ref().and(persisted.user),
            token: persisted.token,
            ..SessionState::default()
        };
        Self { state, storage, last_request: 0, pending: None }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Guard inputs, with storage consulted for whether a token exists at all.
    #[must_use]
    pub fn guard_context(&self) -> GuardContext<'_> {
        GuardContext {
            token: self.state.token(),
            persisted_token: storage::has_token(&self.storage),
            user: self.state.current_user(),
            loading: self.state.loading(),
        }
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        match action {
            Action::LoginRequest => self.login_request(),
            Action::LoginSuccess { request, token, user } => self.login_success(request, token, user),
            Action::LoginFailure { request, message } => self.login_failure(request, message),
            Action::GetMeRequest => self.get_me_request(),
            Action::GetMeSuccess { request, user } => self.get_me_success(request, user),
            Action::GetMeFailure { request, error } => self.get_me_failure(request, &error),
            Action::Logout => {
                self.logout();
                Transition::Applied
            }
            Action::Reset => {
                self.state.clear_outcome();
                Transition::Applied
            }
        }
    }

    /// Drop the in-memory session when storage no longer holds a token
    /// (another tab logged out, or the user cleared site data).
    pub fn reconcile(&mut self) -> bool {
        if self.state.token.is_some() && !storage::has_token(&self.storage) {
            log::info!("persisted token vanished; logging out");
            self.logout();
            return true;
        }
        false
    }

    /// Hand the pending outcome, if any, to `sink` and then clear it.
    pub fn take_outcome(&mut self, sink: &dyn NotificationSink) -> Option<Notice> {
        let notice = Notice::from_state(&self.state)?;
        sink.notify(notice.clone());
        self.state.clear_outcome();
        Some(notice)
    }

    fn start(&mut self, kind: RequestKind) -> RequestId {
        self.last_request += 1;
        let id = RequestId(self.last_request);
        if let Some((superseded, _)) = self.pending.replace((id, kind)) {
            log::debug!("request {superseded:?} superseded by {id:?}");
        }
        self.state.loading = true;
        id
    }

    /// Finish `request` if it is the pending request of `kind`.
    fn finish(&mut self, request: RequestId, kind: RequestKind) -> bool {
        if self.pending == Some((request, kind)) {
            self.pending = None;
            self.state.loading = false;
            true
        } else {
            log::debug!("ignoring stale {kind:?} completion {request:?}");
            false
        }
    }

    fn login_request(&mut self) -> Transition {
        self.state.clear_outcome();
        let id = self.start(RequestKind::Login);
        log::debug!("login requested as {id:?}");
        Transition::Started(id)
    }

    fn login_success(&mut self, request: RequestId, token: String, user: User) -> Transition {
        if !self.finish(request, RequestKind::Login) {
            return Transition::Ignored;
        }
        storage::save_token(&self.storage, &token);
        storage::save_user(&self.storage, &user);
        log::info!("logged in as user {}", user.id);
        self.state.message = Some(format!("Welcome, {}", user.display_name()));
        self.state.token = Some(token);
        self.state.user = Some(user);
        self.state.is_success = true;
        self.state.is_error = false;
        Transition::Applied
    }

    fn login_failure(&mut self, request: RequestId, message: String) -> Transition {
        if !self.finish(request, RequestKind::Login) {
            return Transition::Ignored;
        }
        log::info!("login failed: {message}");
        storage::clear(&self.storage);
        self.state.token = None;
        self.state.user = None;
        self.state.is_success = false;
        self.state.is_error = true;
        self.state.message = Some(message);
        Transition::Applied
    }

    fn get_me_request(&mut self) -> Transition {
        let state = &self.state;
        if state.token.is_none() || state.user.is_some() || state.loading {
            return Transition::Ignored;
        }
        let id = self.start(RequestKind::Hydrate);
        log::debug!("hydration requested as {id:?}");
        Transition::Started(id)
    }

    fn get_me_success(&mut self, request: RequestId, user: User) -> Transition {
        if !self.finish(request, RequestKind::Hydrate) {
            return Transition::Ignored;
        }
        log::debug!("hydrated user {}", user.id);
        storage::save_user(&self.storage, &user);
        self.state.user = Some(user);
        Transition::Applied
    }

    fn get_me_failure(&mut self, request: RequestId, error: &ApiError) -> Transition {
        if !self.finish(request, RequestKind::Hydrate) {
            return Transition::Ignored;
        }
        if error.is_unauthorized() {
            log::info!("credential rejected during hydration; logging out");
            self.logout();
        } else {
            log::warn!("hydration failed, keeping token for retry: {error}");
        }
        self.state.is_success = false;
        self.state.is_error = true;
        self.state.message = Some(error.to_string());
        Transition::Applied
    }

    fn logout(&mut self) {
        if let Some((id, kind)) = self.pending.take() {
            log::debug!("logout abandons {kind:?} request {id:?}");
        }
        storage::clear(&self.storage);
        self.state = SessionState::default();
    }
}
