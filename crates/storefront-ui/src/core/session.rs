//! Authentication form state machine.
//!
//! # Design
//! - One state record per form instance, updated only through its methods.
//! - Accepted submissions wait in an outbox until the view dispatches them.
//! - Submission validates in a fixed order and stops at the first failing step.
//! - Store results are applied only for the request this form is waiting on.

use crate::core::captcha::CaptchaToken;
use crate::core::form::{FieldErrors, FieldName, FormValues};
use crate::core::store::{AuthStatus, RequestId, UserSlice};
use crate::core::strength::{PasswordScore, PasswordScorer, StrengthHint};
use storefront_api_models::{AuthFields, FormMode, UserRole};

/// Popup text when the bot check has not been completed.
pub const CAPTCHA_REQUIRED_MESSAGE: &str = "Please complete the CAPTCHA.";
/// Popup text for transport failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error";

/// Loading state of the submit control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// No request in flight.
    #[default]
    Idle,
    /// A request was dispatched and has not resolved.
    Pending,
    /// The request signed the user in.
    Succeeded,
}

/// Transient message surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupState {
    /// Whether the popup is shown.
    pub visible: bool,
    /// Message text.
    pub message: String,
}

impl PopupState {
    fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
    }
}

/// Request the view should hand to the authentication action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthRequest {
    /// Request body.
    pub fields: AuthFields,
    /// Role being authenticated.
    pub role: UserRole,
    /// Login or registration.
    pub mode: FormMode,
}

/// Why a submission stopped before dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Email and/or password were empty.
    MissingCredentials,
    /// The bot check has not produced a token.
    CaptchaRequired,
    /// Display name was empty.
    MissingUserName,
    /// Shop name was empty.
    MissingShopName,
}

/// State of one authentication form instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthFormState {
    /// Login or registration.
    pub mode: FormMode,
    /// Role being authenticated.
    pub role: UserRole,
    /// Required-field flags.
    pub errors: FieldErrors,
    /// Latest password strength score.
    pub strength: Option<PasswordScore>,
    /// Token from the bot-check widget.
    pub captcha: Option<CaptchaToken>,
    /// Whether the password renders as plaintext.
    pub password_visible: bool,
    /// Popup surface.
    pub popup: PopupState,
    /// Submit control state.
    pub submission: SubmissionState,
    outgoing: Option<AuthRequest>,
    awaiting: Option<RequestId>,
    rejection: Option<Rejection>,
    submit_attempts: u32,
}

impl AuthFormState {
    /// Fresh state for a mounted form.
    #[must_use]
    pub fn new(mode: FormMode, role: UserRole) -> Self {
        Self {
            mode,
            role,
            errors: FieldErrors::default(),
            strength: None,
            captcha: None,
            password_visible: false,
            popup: PopupState::default(),
            submission: SubmissionState::Idle,
            outgoing: None,
            awaiting: None,
            rejection: None,
            submit_attempts: 0,
        }
    }

    /// React to an input edit: clear its error and rescore passwords.
    pub fn change_field(&mut self, field: FieldName, value: &str, scorer: &dyn PasswordScorer) {
        self.errors.clear(field);
        if field == FieldName::Password {
            self.strength = Some(scorer.score(value));
        }
    }

    /// Store the bot-check token.
    pub fn complete_captcha(&mut self, token: CaptchaToken) {
        self.captcha = Some(token);
    }

    /// Validate a submission.
    ///
    /// Missing email or password stops everything else, including the captcha
    /// check. The name checks only run once the captcha is present. A failing
    /// step is kept as [`Self::rejection`]; a passing submission becomes the
    /// outgoing request until [`Self::mark_pending`].
    pub fn submit(&mut self, values: &FormValues) {
        self.submit_attempts = self.submit_attempts.wrapping_add(1);
        match self.validate(values) {
            Ok(request) => {
                self.rejection = None;
                self.outgoing = Some(request);
            }
            Err(rejection) => self.rejection = Some(rejection),
        }
    }

    fn validate(&mut self, values: &FormValues) -> Result<AuthRequest, Rejection> {
        let missing_email = values.is_missing(FieldName::Email);
        let missing_password = values.is_missing(FieldName::Password);
        if missing_email || missing_password {
            self.errors.set(FieldName::Email, missing_email);
            self.errors.set(FieldName::Password, missing_password);
            return Err(Rejection::MissingCredentials);
        }
        self.errors.clear(FieldName::Email);
        self.errors.clear(FieldName::Password);

        if self.captcha.is_none() {
            self.popup.show(CAPTCHA_REQUIRED_MESSAGE);
            return Err(Rejection::CaptchaRequired);
        }

        let email = values.email.clone();
        let password = values.password.clone();
        let fields = match self.mode {
            FormMode::Login => AuthFields::login(email, password),
            FormMode::Register => {
                if values.is_missing(FieldName::UserName) {
                    self.errors.set(FieldName::UserName, true);
                    return Err(Rejection::MissingUserName);
                }
                self.errors.clear(FieldName::UserName);
                let name = values.user_name.clone();
                match self.role {
                    UserRole::Customer => AuthFields::customer(name, email, password),
                    UserRole::Seller => {
                        if values.is_missing(FieldName::ShopName) {
                            self.errors.set(FieldName::ShopName, true);
                            return Err(Rejection::MissingShopName);
                        }
                        self.errors.clear(FieldName::ShopName);
                        AuthFields::seller(name, email, password, values.shop_name.clone())
                    }
                }
            }
        };

        Ok(AuthRequest {
            fields,
            role: self.role,
            mode: self.mode,
        })
    }

    /// Why the latest submission stopped, if it did.
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        self.rejection
    }

    /// Number of submit attempts; changes on every submit, passing or not.
    #[must_use]
    pub const fn submit_attempts(&self) -> u32 {
        self.submit_attempts
    }

    /// Input that should take focus after the latest rejection.
    #[must_use]
    pub const fn focus_target(&self) -> Option<FieldName> {
        match self.rejection {
            Some(Rejection::MissingCredentials) if self.errors.get(FieldName::Email) => {
                Some(FieldName::Email)
            }
            Some(Rejection::MissingCredentials) => Some(FieldName::Password),
            Some(Rejection::MissingUserName) => Some(FieldName::UserName),
            Some(Rejection::MissingShopName) => Some(FieldName::ShopName),
            Some(Rejection::CaptchaRequired) | None => None,
        }
    }

    /// Request accepted by [`Self::submit`] that has not been dispatched yet.
    #[must_use]
    pub const fn outgoing(&self) -> Option<&AuthRequest> {
        self.outgoing.as_ref()
    }

    /// Record that the outgoing request was dispatched and start waiting on it.
    pub fn mark_pending(&mut self, id: RequestId) {
        self.outgoing = None;
        self.awaiting = Some(id);
        self.submission = SubmissionState::Pending;
    }

    /// Apply the store's latest result if it belongs to the awaited request.
    ///
    /// Returns `true` when a terminal result was applied. Once applied the form
    /// stops waiting, so observing the same slice again changes nothing.
    pub fn observe(&mut self, slice: &UserSlice) -> bool {
        let Some(awaiting) = self.awaiting else {
            return false;
        };
        if slice.request != Some(awaiting) {
            return false;
        }
        match slice.status {
            AuthStatus::Idle | AuthStatus::Pending => return false,
            AuthStatus::Success => {
                if slice.current_role.is_none() {
                    return false;
                }
                self.submission = SubmissionState::Succeeded;
            }
            AuthStatus::Failed => {
                self.popup.show(slice.response.clone().unwrap_or_default());
                self.submission = SubmissionState::Idle;
            }
            AuthStatus::Error => {
                self.popup.show(NETWORK_ERROR_MESSAGE);
                self.submission = SubmissionState::Idle;
            }
        }
        self.awaiting = None;
        true
    }

    /// Whether the form finished signing in and the page should leave for home.
    #[must_use]
    pub fn navigates_home(&self) -> bool {
        self.submission == SubmissionState::Succeeded
    }

    /// Hide the popup.
    pub fn dismiss_popup(&mut self) {
        self.popup.visible = false;
    }

    /// Flip between masked and plaintext password rendering.
    pub const fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// `type` attribute for the password input.
    #[must_use]
    pub const fn password_input_type(&self) -> &'static str {
        FieldName::Password.input_type(self.password_visible)
    }

    /// Strength hint to render; registration only.
    #[must_use]
    pub fn strength_hint(&self) -> Option<StrengthHint> {
        match self.mode {
            FormMode::Register => StrengthHint::from_score(self.strength),
            FormMode::Login => None,
        }
    }

    /// Whether the submit control shows its loading indicator.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.submission == SubmissionState::Pending
    }

    /// Request the form is waiting on, if any.
    #[must_use]
    pub const fn awaiting(&self) -> Option<RequestId> {
        self.awaiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::AuthOutcome;
    use crate::core::strength::fakes::LengthScorer;
    use serde_json::json;
    use storefront_api_models::AuthenticatedUser;

    fn values(email: &str, password: &str, user_name: &str, shop_name: &str) -> FormValues {
        FormValues {
            email: email.to_string(),
            password: password.to_string(),
            user_name: user_name.to_string(),
            shop_name: shop_name.to_string(),
        }
    }

    fn with_captcha(mode: FormMode, role: UserRole) -> AuthFormState {
        let mut state = AuthFormState::new(mode, role);
        if let Some(token) = CaptchaToken::new("tok") {
            state.complete_captcha(token);
        }
        state
    }

    #[test]
    fn empty_email_flags_field_and_skips_dispatch() {
        for mode in [FormMode::Login, FormMode::Register] {
            for role in [UserRole::Customer, UserRole::Seller] {
                let mut state = with_captcha(mode, role);
                state.submit(&values("", "pw", "Ada", "Shop"));
                assert_eq!(state.rejection(), Some(Rejection::MissingCredentials));
                assert_eq!(state.outgoing(), None);
                assert!(state.errors.get(FieldName::Email));
                assert!(!state.errors.get(FieldName::Password));
                assert_eq!(state.focus_target(), Some(FieldName::Email));
            }
        }
    }

    #[test]
    fn missing_credentials_short_circuit_captcha_and_names() {
        let mut state = AuthFormState::new(FormMode::Register, UserRole::Seller);
        state.submit(&values("", "", "", ""));
        assert_eq!(state.rejection(), Some(Rejection::MissingCredentials));
        assert!(state.errors.get(FieldName::Email));
        assert!(state.errors.get(FieldName::Password));
        assert!(!state.errors.get(FieldName::UserName));
        assert!(!state.errors.get(FieldName::ShopName));
        assert!(!state.popup.visible);
    }

    #[test]
    fn missing_captcha_shows_popup_without_checking_names() {
        let mut state = AuthFormState::new(FormMode::Register, UserRole::Seller);
        state.submit(&values("a@b.com", "x", "", ""));
        assert_eq!(state.rejection(), Some(Rejection::CaptchaRequired));
        assert_eq!(state.focus_target(), None);
        assert_eq!(state.outgoing(), None);
        assert_eq!(
            state.popup,
            PopupState {
                visible: true,
                message: CAPTCHA_REQUIRED_MESSAGE.to_string(),
            }
        );
        assert!(!state.errors.any());
    }

    #[test]
    fn seller_registration_requires_shop_name() {
        let mut state = with_captcha(FormMode::Register, UserRole::Seller);
        state.submit(&values("a@b.com", "x", "Ada", ""));
        assert_eq!(state.rejection(), Some(Rejection::MissingShopName));
        assert_eq!(state.focus_target(), Some(FieldName::ShopName));
        assert_eq!(state.outgoing(), None);
        assert!(state.errors.get(FieldName::ShopName));
        assert!(!state.errors.get(FieldName::UserName));
    }

    #[test]
    fn registration_requires_user_name() {
        let mut state = with_captcha(FormMode::Register, UserRole::Customer);
        state.submit(&values("a@b.com", "x", "", ""));
        assert_eq!(state.rejection(), Some(Rejection::MissingUserName));
        assert_eq!(state.focus_target(), Some(FieldName::UserName));
        assert!(state.errors.get(FieldName::UserName));
    }

    #[test]
    fn valid_login_dispatches_credentials_only() -> Result<(), serde_json::Error> {
        let mut state = with_captcha(FormMode::Login, UserRole::Customer);
        assert_eq!(state.submission, SubmissionState::Idle);
        state.submit(&values("a@b.com", "x", "", ""));
        let Some(request) = state.outgoing().cloned() else {
            panic!("expected an outgoing request");
        };
        assert_eq!(state.rejection(), None);
        assert_eq!(
            serde_json::to_value(&request.fields)?,
            json!({ "email": "a@b.com", "password": "x" })
        );
        assert_eq!(request.role, UserRole::Customer);
        assert_eq!(request.mode, FormMode::Login);


        state.mark_pending(RequestId::FIRST);
        assert_eq!(state.submission, SubmissionState::Pending);
        assert_eq!(state.outgoing(), None);
        assert!(state.is_loading());
        Ok(())
    }

    #[test]
    fn seller_registration_dispatches_full_payload() -> Result<(), serde_json::Error> {
        let mut state = with_captcha(FormMode::Register, UserRole::Seller);
        state.submit(&values("a@b.com", "x", "Ada", "Ada's Goods"));
        let Some(request) = state.outgoing().cloned() else {
            panic!("expected an outgoing request");
        };
        assert_eq!(
            serde_json::to_value(&request.fields)?,
            json!({
                "name": "Ada",
                "email": "a@b.com",
                "password": "x",
                "role": "Seller",
                "shopName": "Ada's Goods"
            })
        );
        Ok(())
    }

    #[test]
    fn resubmit_clears_fixed_errors() {
        let mut state = with_captcha(FormMode::Login, UserRole::Customer);
        state.submit(&values("", "", "", ""));
        assert!(state.errors.get(FieldName::Password));
        assert_eq!(state.focus_target(), Some(FieldName::Email));
        state.submit(&values("a@b.com", "x", "", ""));
        assert!(!state.errors.any());
        assert_eq!(state.rejection(), None);
        assert_eq!(state.focus_target(), None);
        assert_eq!(state.submit_attempts(), 2);
    }

    #[test]
    fn missing_password_alone_focuses_password() {
        let mut state = with_captcha(FormMode::Login, UserRole::Customer);
        state.submit(&values("a@b.com", "", "", ""));
        assert_eq!(state.focus_target(), Some(FieldName::Password));
        state.submit(&values("a@b.com", "", "", ""));
        assert_eq!(state.submit_attempts(), 2);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = AuthFormState::new(FormMode::Login, UserRole::Customer);
        state.submit(&values("", "", "", ""));
        state.change_field(FieldName::Email, "a", &LengthScorer);
        assert!(!state.errors.get(FieldName::Email));
        assert!(state.errors.get(FieldName::Password));
        assert_eq!(state.strength, None);
    }

    #[test]
    fn failed_outcome_shows_server_message_and_stops_loading() {
        let mut slice = UserSlice::default();
        let mut state = with_captcha(FormMode::Login, UserRole::Customer);
        let id = slice.issue_request();
        state.mark_pending(id);
        assert!(!state.observe(&slice));
        assert!(state.is_loading());

        slice.resolve(id, AuthOutcome::Failed("Invalid credentials".to_string()));
        assert!(state.observe(&slice));
        assert!(!state.navigates_home());
        assert_eq!(
            state.popup,
            PopupState {
                visible: true,
                message: "Invalid credentials".to_string(),
            }
        );
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn transport_error_shows_generic_message() {
        let mut slice = UserSlice::default();
        let mut state = with_captcha(FormMode::Login, UserRole::Customer);
        let id = slice.issue_request();
        state.mark_pending(id);
        slice.resolve(id, AuthOutcome::Error("fetch failed".to_string()));
        state.observe(&slice);
        assert_eq!(state.popup.message, NETWORK_ERROR_MESSAGE);
        assert!(!state.is_loading());
    }

    #[test]
    fn success_with_role_navigates_home_once() {
        let mut slice = UserSlice::default();
        let mut state = with_captcha(FormMode::Login, UserRole::Seller);
        let id = slice.issue_request();
        state.mark_pending(id);
        slice.resolve(
            id,
            AuthOutcome::Success(AuthenticatedUser {
                id: None,
                name: None,
                email: "a@b.com".to_string(),
                role: Some(UserRole::Seller),
                shop_name: None,
            }),
        );
        assert!(state.observe(&slice));
        assert_eq!(state.submission, SubmissionState::Succeeded);
        assert!(state.navigates_home());
        assert!(!state.observe(&slice));
    }

    #[test]
    fn unrelated_store_results_are_ignored() {
        let mut slice = UserSlice::default();
        let earlier = slice.issue_request();
        slice.resolve(earlier, AuthOutcome::Failed("old".to_string()));

        let mut state = with_captcha(FormMode::Login, UserRole::Customer);
        assert!(!state.observe(&slice));
        assert!(!state.popup.visible);

        let first = slice.issue_request();
        state.mark_pending(first);
        let second = slice.issue_request();
        state.mark_pending(second);
        assert!(!slice.resolve(first, AuthOutcome::Failed("stale".to_string())));
        assert!(!state.observe(&slice));
        assert!(state.is_loading());
        assert_eq!(state.awaiting(), Some(second));
    }

    #[test]
    fn dismissed_popup_stays_closed_on_reevaluation() {
        let mut slice = UserSlice::default();
        let mut state = with_captcha(FormMode::Login, UserRole::Customer);
        let id = slice.issue_request();
        state.mark_pending(id);
        slice.resolve(id, AuthOutcome::Failed("Invalid credentials".to_string()));
        state.observe(&slice);
        state.dismiss_popup();
        state.observe(&slice);
        assert!(!state.popup.visible);
    }

    #[test]
    fn strength_hint_tracks_password_edits_in_register_mode() {
        let mut state = AuthFormState::new(FormMode::Register, UserRole::Customer);
        assert_eq!(state.strength_hint(), None);
        state.change_field(FieldName::Password, "abcdefghijkl", &LengthScorer);
        assert_eq!(state.strength.map(PasswordScore::value), Some(4));
        assert_eq!(state.strength_hint(), Some(StrengthHint::Strong));
        state.change_field(FieldName::Password, "abc", &LengthScorer);
        assert_eq!(state.strength.map(PasswordScore::value), Some(1));
        assert_eq!(state.strength_hint(), Some(StrengthHint::Weak));
        state.change_field(FieldName::Password, "", &LengthScorer);
        assert_eq!(state.strength_hint(), None);
    }

    #[test]
    fn login_mode_never_shows_strength() {
        let mut state = AuthFormState::new(FormMode::Login, UserRole::Customer);
        state.change_field(FieldName::Password, "abcdefghijkl", &LengthScorer);
        assert_eq!(state.strength.map(PasswordScore::value), Some(4));
        assert_eq!(state.strength_hint(), None);
    }

    #[test]
    fn visibility_toggle_round_trips() {
        let mut state = AuthFormState::new(FormMode::Login, UserRole::Customer);
        assert_eq!(state.password_input_type(), "password");
        state.toggle_password_visibility();
        assert_eq!(state.password_input_type(), "text");
        state.toggle_password_visibility();
        assert_eq!(state.password_input_type(), "password");
        assert!(!state.password_visible);
    }
}
