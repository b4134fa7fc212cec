//! Login and registration page.
//!
//! # Design
//! - Inputs are uncontrolled; values are read from their nodes on submit.
//! - State changes go through the form reducer so async callbacks never act on stale snapshots.
//! - An accepted submission sits in the form's outbox until an effect dispatches it.
//! - A rejected submission moves focus to the input that stopped it.

use crate::app::context::Services;
use crate::app::routes::Route;
use crate::components::captcha::CaptchaWidget;
use crate::components::popup::Popup;
use crate::core::captcha::CaptchaToken;
use crate::core::form::{FieldName, FieldVisibility, FormCopy, FormValues};
use crate::core::reducer::FormAction;
use crate::core::session::{AuthFormState, AuthRequest};
use crate::core::store::{AppStore, RequestId, UserSlice};
use crate::features::auth::actions::auth_user;
use crate::i18n::{DEFAULT_LOCALE, TextKey, TranslationBundle};
use gloo::console;
use std::rc::Rc;
use storefront_api_models::{FormMode, UserRole};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct AuthenticationPageProps {
    pub mode: FormMode,
    pub role: UserRole,
}

#[derive(Clone, Default, PartialEq)]
struct FieldRefs {
    email: NodeRef,
    password: NodeRef,
    user_name: NodeRef,
    shop_name: NodeRef,
}

impl FieldRefs {
    const fn get(&self, field: FieldName) -> &NodeRef {
        match field {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::UserName => &self.user_name,
            FieldName::ShopName => &self.shop_name,
        }
    }

    fn input(&self, field: FieldName) -> Option<HtmlInputElement> {
        self.get(field).cast::<HtmlInputElement>()
    }

    fn values(&self) -> FormValues {
        let read = |field| self.input(field).map(|input| input.value()).unwrap_or_default();
        FormValues {
            email: read(FieldName::Email),
            password: read(FieldName::Password),
            user_name: read(FieldName::UserName),
            shop_name: read(FieldName::ShopName),
        }
    }
}

#[function_component(AuthenticationPage)]
pub(crate) fn authentication_page(props: &AuthenticationPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let services = use_context::<Services>().unwrap_or_else(Services::from_environment);
    let navigator = use_navigator();
    let store = Dispatch::<AppStore>::new();
    let user = use_selector(|store: &AppStore| store.user.clone());

    let form = {
        let (mode, role) = (props.mode, props.role);
        use_reducer(move || AuthFormState::new(mode, role))
    };
    let refs = use_memo(|_| FieldRefs::default(), ());

    {
        let form = form.clone();
        let api = services.api.clone();
        let outgoing = form.outgoing().cloned();
        use_effect_with_deps(
            move |outgoing: &Option<AuthRequest>| {
                if let Some(request) = outgoing.clone() {
                    let id = auth_user(&store, api, request);
                    form.dispatch(FormAction::Dispatched(id));
                }
                || ()
            },
            outgoing,
        );
    }

    {
        let form = form.clone();
        let awaiting = form.awaiting();
        use_effect_with_deps(
            move |(slice, _): &(Rc<UserSlice>, Option<RequestId>)| {
                form.dispatch(FormAction::Observe(slice.clone()));
                || ()
            },
            (user, awaiting),
        );
    }

    {
        let refs = refs.clone();
        use_effect_with_deps(
            move |(_, target): &(u32, Option<FieldName>)| {
                if let Some(input) = target.and_then(|field| refs.input(field))
                    && let Err(err) = input.focus()
                {
                    console::warn!("focus failed", err);
                }
                || ()
            },
            (form.submit_attempts(), form.focus_target()),
        );
    }

    use_effect_with_deps(
        move |navigates_home: &bool| {
            if *navigates_home && let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
            || ()
        },
        form.navigates_home(),
    );

    let on_input = {
        let form = form.clone();
        let scorer = services.scorer;
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if let Some(field) = FieldName::from_name(&input.name()) {
                form.dispatch(FormAction::ChangeField {
                    field,
                    value: input.value(),
                    scorer: scorer.clone(),
                });
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let refs = refs.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit(refs.values()));
        })
    };

    let on_captcha = {
        let form = form.clone();
        Callback::from(move |token: CaptchaToken| form.dispatch(FormAction::CompleteCaptcha(token)))
    };

    let on_toggle_password = {
        let form = form.clone();
        Callback::from(move |_| form.dispatch(FormAction::TogglePasswordVisibility))
    };

    let on_dismiss_popup = {
        let form = form.clone();
        Callback::from(move |()| form.dispatch(FormAction::DismissPopup))
    };

    let copy = FormCopy::new(props.mode, props.role);
    let visibility = FieldVisibility::for_form(props.mode, props.role);
    let loading = form.is_loading();

    let password_extras = {
        let toggle_label = bundle.text(if form.password_visible {
            TextKey::HidePassword
        } else {
            TextKey::ShowPassword
        });
        let hint = form.strength_hint().map(|hint| {
            html! {
                <p class={classes!("strength-hint", hint.tone_class())} aria-live="polite">
                    {bundle.text(hint.message())}
                </p>
            }
        });
        html! {
            <>
                <button
                    type="button"
                    class="ghost password-toggle"
                    aria-label={toggle_label.clone()}
                    aria-pressed={form.password_visible.to_string()}
                    onclick={on_toggle_password}
                >{toggle_label}</button>
                {for hint}
            </>
        }
    };

    html! {
        <div class="auth-page">
            <section class="auth-card">
                <header>
                    <h2>{copy.title()}</h2>
                    <p class="muted">{bundle.text(copy.subtitle())}</p>
                </header>
                <form class="stack" onsubmit={on_submit}>
                    {for visibility.fields().into_iter().map(|field| {
                        let (input_type, extras) = if field == FieldName::Password {
                            (form.password_input_type(), Some(password_extras.clone()))
                        } else {
                            (field.input_type(false), None)
                        };
                        render_field(
                            field,
                            &bundle,
                            refs.get(field).clone(),
                            input_type,
                            form.errors.get(field),
                            on_input.clone(),
                            extras,
                        )
                    })}
                    <CaptchaWidget
                        site_key={services.bot_check.site_key.clone()}
                        on_complete={on_captcha}
                    />
                    <button type="submit" class="solid" aria-busy={loading.to_string()}>
                        if loading {
                            <span class="loading loading-spinner" role="status"></span>
                        } else {
                            {bundle.text(copy.submit_label())}
                        }
                    </button>
                </form>
                <p class="switch-mode">
                    <span>{bundle.text(copy.switch_prompt())}</span>
                    {" "}
                    <Link<Route> to={Route::auth(props.role, copy.alternate_mode())}>
                        {bundle.text(copy.switch_link())}
                    </Link<Route>>
                </p>
            </section>
            <aside class="auth-backdrop" aria-hidden="true">
                <h3>{copy.title()}</h3>
            </aside>
            <Popup
                message={AttrValue::from(form.popup.message.clone())}
                visible={form.popup.visible}
                on_dismiss={on_dismiss_popup}
            />
        </div>
    }
}

fn render_field(
    field: FieldName,
    bundle: &TranslationBundle,
    node: NodeRef,
    input_type: &'static str,
    flagged: bool,
    oninput: Callback<InputEvent>,
    extras: Option<Html>,
) -> Html {
    let label = bundle.text(field.label());
    let helper_id = format!("{}-helper", field.as_str());
    html! {
        <label class={classes!("stack", flagged.then_some("field-error"))}>
            <span>{label.clone()}</span>
            <input
                ref={node}
                type={input_type}
                name={field.as_str()}
                placeholder={label}
                autocomplete={field.autocomplete()}
                aria-invalid={flagged.to_string()}
                aria-describedby={helper_id.clone()}
                {oninput}
            />
            {for extras}
            if flagged {
                <p id={helper_id} class="error-text">{bundle.text(field.required_message())}</p>
            }
        </label>
    }
}
