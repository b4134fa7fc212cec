//! Reducer glue between view events and [`AuthFormState`].
//!
//! # Design
//! - Each action maps onto exactly one state method.
//! - An action that changes nothing hands back the same `Rc`, so the page does not re-render.

use crate::core::captcha::CaptchaToken;
use crate::core::form::{FieldName, FormValues};
use crate::core::session::AuthFormState;
use crate::core::store::{RequestId, UserSlice};
use crate::core::strength::PasswordScorer;
use std::rc::Rc;
use yew::Reducible;

/// Events applied to the form state.
pub enum FormAction {
    /// An input changed.
    ChangeField {
        /// Input that changed.
        field: FieldName,
        /// Its new value.
        value: String,
        /// Estimator for password edits.
        scorer: Rc<dyn PasswordScorer>,
    },
    /// The bot check produced a token.
    CompleteCaptcha(CaptchaToken),
    /// The form was submitted with these values.
    Submit(FormValues),
    /// The outgoing request was dispatched under this id.
    Dispatched(RequestId),
    /// The user slice of the store changed.
    Observe(Rc<UserSlice>),
    /// The popup was closed.
    DismissPopup,
    /// The password visibility control was pressed.
    TogglePasswordVisibility,
}

impl Reducible for AuthFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::ChangeField {
                field,
                value,
                scorer,
            } => next.change_field(field, &value, scorer.as_ref()),
            FormAction::CompleteCaptcha(token) => next.complete_captcha(token),
            FormAction::Submit(values) => next.submit(&values),
            FormAction::Dispatched(id) => next.mark_pending(id),
            FormAction::Observe(slice) => {
                next.observe(&slice);
            }
            FormAction::DismissPopup => next.dismiss_popup(),
            FormAction::TogglePasswordVisibility => next.toggle_password_visibility(),
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::{NETWORK_ERROR_MESSAGE, SubmissionState};
    use crate::core::store::AuthOutcome;
    use crate::core::strength::PasswordScore;
    use crate::core::strength::fakes::LengthScorer;
    use storefront_api_models::{FormMode, UserRole};

    fn login_values() -> FormValues {
        FormValues {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            ..FormValues::default()
        }
    }

    fn ready_form() -> Rc<AuthFormState> {
        let state = Rc::new(AuthFormState::new(FormMode::Login, UserRole::Customer));
        let Some(token) = CaptchaToken::new("tok") else {
            panic!("expected token");
        };
        state.reduce(FormAction::CompleteCaptcha(token))
    }

    #[test]
    fn submit_dispatch_and_failure_round() {
        let mut slice = UserSlice::default();
        let state = ready_form().reduce(FormAction::Submit(login_values()));
        assert!(state.outgoing().is_some());

        let id = slice.issue_request();
        let state = state.reduce(FormAction::Dispatched(id));
        assert_eq!(state.outgoing(), None);
        assert_eq!(state.submission, SubmissionState::Pending);

        slice.resolve(id, AuthOutcome::Failed("Invalid credentials".to_string()));
        let state = state.reduce(FormAction::Observe(Rc::new(slice.clone())));
        assert!(state.popup.visible);
        assert_eq!(state.popup.message, "Invalid credentials");
        assert_eq!(state.submission, SubmissionState::Idle);

        let again = Rc::clone(&state).reduce(FormAction::Observe(Rc::new(slice)));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn transport_failure_round_shows_network_error() {
        let mut slice = UserSlice::default();
        let id = slice.issue_request();
        let state = ready_form()
            .reduce(FormAction::Submit(login_values()))
            .reduce(FormAction::Dispatched(id));
        slice.resolve(id, AuthOutcome::Error("offline".to_string()));
        let state = state.reduce(FormAction::Observe(Rc::new(slice)));
        assert_eq!(state.popup.message, NETWORK_ERROR_MESSAGE);
        assert!(!state.is_loading());
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let state = Rc::new(AuthFormState::new(FormMode::Register, UserRole::Seller));

        let dismissed = Rc::clone(&state).reduce(FormAction::DismissPopup);
        assert!(Rc::ptr_eq(&state, &dismissed));

        let observed = Rc::clone(&state).reduce(FormAction::Observe(Rc::default()));
        assert!(Rc::ptr_eq(&state, &observed));

        let edited = Rc::clone(&state).reduce(FormAction::ChangeField {
            field: FieldName::Email,
            value: "a".to_string(),
            scorer: Rc::new(LengthScorer),
        });
        assert!(Rc::ptr_eq(&state, &edited));
    }

    #[test]
    fn changed_state_gets_a_new_rc() {
        let state = Rc::new(AuthFormState::new(FormMode::Register, UserRole::Customer));
        let toggled = Rc::clone(&state).reduce(FormAction::TogglePasswordVisibility);
        assert!(!Rc::ptr_eq(&state, &toggled));
        assert!(toggled.password_visible);

        let scored = toggled.reduce(FormAction::ChangeField {
            field: FieldName::Password,
            value: "abcdefghijkl".to_string(),
            scorer: Rc::new(LengthScorer),
        });
        assert_eq!(scored.strength.map(PasswordScore::value), Some(4));
    }
}
