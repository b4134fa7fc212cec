//! App shell: contexts, routing, and the landing page.
//!
//! # Design
//! - Build singleton services once per boot and hand them down through contexts.
//! - Key each authentication route by role and mode so switching forms starts fresh.
//! - Keep locale selection in the shell and persist it on change.

pub(crate) mod context;
pub(crate) mod preferences;
pub(crate) mod routes;

use crate::app::context::Services;
use crate::app::preferences::{load_locale, persist_locale};
use crate::app::routes::Route;
use crate::core::store::AppStore;
use crate::features::auth::view::AuthenticationPage;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TextKey, TranslationBundle};
use storefront_api_models::{FormMode, UserRole};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const HOME_LINKS: [(UserRole, FormMode, TextKey); 4] = [
    (UserRole::Customer, FormMode::Login, TextKey::HomeCustomerLogin),
    (UserRole::Seller, FormMode::Login, TextKey::HomeSellerLogin),
    (UserRole::Customer, FormMode::Register, TextKey::HomeCustomerRegister),
    (UserRole::Seller, FormMode::Register, TextKey::HomeSellerRegister),
];

#[function_component(StorefrontApp)]
fn storefront_app() -> Html {
    let locale = use_state(load_locale);
    let services = use_memo(|_| Services::from_environment(), ());
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| {
            persist_locale(next);
            locale.set(next);
        })
    };

    let current_locale = *locale;
    let render = move |route: Route| match route.auth_form() {
        Some((role, mode)) => {
            html! { <AuthenticationPage key={format!("{role}{mode}")} {role} {mode} /> }
        }
        None if route == Route::Home => {
            html! { <HomePage locale={current_locale} on_locale={on_locale.clone()} /> }
        }
        None => html! { <NotFound /> },
    };

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <main class="storefront" lang={current_locale.code()}>
                        <Switch<Route> {render} />
                    </main>
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<Services>>
    }
}

#[derive(Properties, PartialEq)]
struct HomePageProps {
    locale: LocaleCode,
    on_locale: Callback<LocaleCode>,
}

#[function_component(HomePage)]
fn home_page(props: &HomePageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(props.locale));
    let user = use_selector(|store: &AppStore| store.user.clone());

    let sign_out = Callback::from(|_| {
        Dispatch::<AppStore>::new().reduce_mut(|store| store.user.sign_out());
    });

    let account = if user.is_signed_in()
        && let Some(account) = &user.current_user
    {
        let display = account.name.clone().unwrap_or_else(|| account.email.clone());
        let role = user.current_role.map(|role| format!(" ({role})"));
        html! {
            <div class="account">
                <p>
                    {bundle.text(TextKey::HomeSignedInAs)}{" "}
                    <strong>{display}</strong>
                    {for role}
                </p>
                {for account.shop_name.clone().map(|shop| html! { <p class="muted">{shop}</p> })}
                <button type="button" class="ghost" onclick={sign_out}>
                    {bundle.text(TextKey::HomeSignOut)}
                </button>
            </div>
        }
    } else {
        html! { <p class="muted">{bundle.text(TextKey::HomeSignedOut)}</p> }
    };

    html! {
        <section class="home">
            <header>
                <h1>{bundle.text(TextKey::HomeTitle)}</h1>
                <LocaleSwitcher locale={props.locale} on_select={props.on_locale.clone()} />
            </header>
            {account}
            <nav>
                <ul>
                    {for HOME_LINKS.iter().map(|&(role, mode, key)| html! {
                        <li>
                            <Link<Route> to={Route::auth(role, mode)}>
                                {bundle.text(key)}
                            </Link<Route>>
                        </li>
                    })}
                </ul>
            </nav>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct LocaleSwitcherProps {
    locale: LocaleCode,
    on_select: Callback<LocaleCode>,
}

#[function_component(LocaleSwitcher)]
fn locale_switcher(props: &LocaleSwitcherProps) -> Html {
    html! {
        <ul class="locale-switcher" role="menu">
            {for LocaleCode::all().into_iter().map(|next| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(next));
                html! {
                    <li>
                        <button
                            type="button"
                            class={classes!("ghost", (next == props.locale).then_some("active"))}
                            lang={next.code()}
                            {onclick}
                        >{next.label()}</button>
                    </li>
                }
            })}
        </ul>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <section class="not-found">
            <p>{bundle.text(TextKey::NotFound)}</p>
            <Link<Route> to={Route::Home}>{bundle.text(TextKey::HomeTitle)}</Link<Route>>
        </section>
    }
}

/// Mount the app into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<StorefrontApp>::with_root(root).render();
    } else {
        yew::Renderer::<StorefrontApp>::new().render();
    }
}
