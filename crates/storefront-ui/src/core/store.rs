//! App-wide yewdux store slices.
//!
//! # Design
//! - The user slice records the lifecycle of the latest authentication request.
//! - Every request gets a monotonic id; results for superseded ids are dropped.
//! - Reducers are plain methods so they run in native tests.

use storefront_api_models::{AuthError, AuthenticatedUser, UserRole};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Signed-in user and authentication request state.
    pub user: UserSlice,
}

/// Identifier of one authentication request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Id of the first request issued by a store.
    pub const FIRST: Self = Self(1);

    /// Raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Id issued after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Lifecycle of the latest authentication request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Waiting on the backend.
    Pending,
    /// Signed in or registered.
    Success,
    /// The backend rejected the request.
    Failed,
    /// The request failed in transport.
    Error,
}

/// Result of one authentication request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Account returned by the backend.
    Success(AuthenticatedUser),
    /// Server-provided rejection message.
    Failed(String),
    /// Transport failure detail.
    Error(String),
}

impl AuthOutcome {
    /// Map a client result into an outcome.
    #[must_use]
    pub fn from_result(result: Result<AuthenticatedUser, AuthError>) -> Self {
        match result {
            Ok(user) => Self::Success(user),
            Err(AuthError::Rejected { message }) => Self::Failed(message),
            Err(AuthError::Transport { detail } | AuthError::Decode { detail }) => {
                Self::Error(detail)
            }
        }
    }
}

/// Signed-in user and the state of the latest authentication request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserSlice {
    /// Latest request status.
    pub status: AuthStatus,
    /// Account from the last successful request.
    pub current_user: Option<AuthenticatedUser>,
    /// Role reported for the current account.
    pub current_role: Option<UserRole>,
    /// Rejection message from the last failed request.
    pub response: Option<String>,
    /// Transport error detail from the last errored request.
    pub error: Option<String>,
    /// Latest issued request id.
    pub request: Option<RequestId>,
}

impl UserSlice {
    /// Start a new request and mark it pending.
    pub fn issue_request(&mut self) -> RequestId {
        let id = self.request.map_or(RequestId::FIRST, RequestId::next);
        self.request = Some(id);
        self.status = AuthStatus::Pending;
        self.response = None;
        self.error = None;
        id
    }

    /// Record the outcome of a request. Returns `false` when `id` was superseded.
    pub fn resolve(&mut self, id: RequestId, outcome: AuthOutcome) -> bool {
        if self.request != Some(id) {
            return false;
        }
        match outcome {
            AuthOutcome::Success(user) => {
                self.status = AuthStatus::Success;
                self.current_role = user.role;
                self.current_user = Some(user);
            }
            AuthOutcome::Failed(message) => {
                self.status = AuthStatus::Failed;
                self.response = Some(message);
            }
            AuthOutcome::Error(detail) => {
                self.status = AuthStatus::Error;
                self.error = Some(detail);
            }
        }
        true
    }

    /// Forget the signed-in account. The request counter keeps counting.
    pub fn sign_out(&mut self) {
        *self = Self {
            request: self.request,
            ..Self::default()
        };
    }

    /// Whether an account is signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.current_user.is_some() && self.current_role.is_some()
    }
}
