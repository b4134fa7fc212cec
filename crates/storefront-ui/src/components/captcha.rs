//! Bot-check widget backed by the explicit-render reCAPTCHA API.
//!
//! # Design
//! - Inject the loader script once per document; later mounts reuse it.
//! - Render into the container immediately when the API is ready, else from the onload hook.
//! - The JS callbacks live as long as the mounted widget and are released on unmount.
//! - Tokens are forwarded through the latest `on_complete` callback, never a stale one.

use crate::core::captcha::CaptchaToken;
use crate::i18n::{DEFAULT_LOCALE, TextKey, TranslationBundle};
use gloo::console;
use gloo::utils::{document, window};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlScriptElement};
use yew::prelude::*;

const SCRIPT_ID: &str = "storefront-recaptcha-loader";
const READY_HOOK: &str = "storefrontRecaptchaReady";
const SCRIPT_SRC: &str =
    "https://www.google.com/recaptcha/api.js?onload=storefrontRecaptchaReady&render=explicit";

#[derive(Properties, PartialEq)]
pub(crate) struct CaptchaWidgetProps {
    pub site_key: AttrValue,
    pub on_complete: Callback<CaptchaToken>,
}

#[function_component(CaptchaWidget)]
pub(crate) fn captcha_widget(props: &CaptchaWidgetProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let container = use_node_ref();
    let rendered = use_state(|| false);
    let latest = use_mut_ref(|| props.on_complete.clone());
    *latest.borrow_mut() = props.on_complete.clone();

    {
        let container = container.clone();
        let rendered = rendered.clone();
        use_effect_with_deps(
            move |site_key: &AttrValue| {
                let on_token = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
                    let Some(token) = value.as_string().and_then(CaptchaToken::new) else {
                        console::warn!("captcha returned an empty token");
                        return;
                    };
                    latest.borrow().emit(token);
                });
                let callback: Function = on_token.as_ref().unchecked_ref::<Function>().clone();
                let site_key = site_key.to_string();
                let mut on_ready = None;

                if let Some(target) = container.cast::<HtmlElement>() {
                    if grecaptcha_render().is_some() {
                        mount_widget(&target, &site_key, &callback, &rendered);
                    } else {
                        let hook = Closure::<dyn FnMut()>::new(move || {
                            mount_widget(&target, &site_key, &callback, &rendered);
                        });
                        if let Err(err) =
                            Reflect::set(&window(), &JsValue::from_str(READY_HOOK), hook.as_ref())
                        {
                            console::error!("captcha hook install failed", err);
                        }
                        on_ready = Some(hook);
                        inject_loader();
                    }
                }

                move || {
                    if on_ready.is_some()
                        && let Err(err) = Reflect::delete_property(
                            window().unchecked_ref::<Object>(),
                            &JsValue::from_str(READY_HOOK),
                        )
                    {
                        console::warn!("captcha hook removal failed", err);
                    }
                    drop(on_ready);
                    drop(on_token);
                }
            },
            props.site_key.clone(),
        );
    }

    html! {
        <div class="captcha">
            <div ref={container} class="captcha-widget"></div>
            if !*rendered {
                <span class="captcha-loading" role="status">
                    {bundle.text(TextKey::CaptchaLoading)}
                </span>
            }
        </div>
    }
}

fn grecaptcha_render() -> Option<(JsValue, Function)> {
    let api = Reflect::get(&window(), &JsValue::from_str("grecaptcha")).ok()?;
    if api.is_undefined() || api.is_null() {
        return None;
    }
    let render = Reflect::get(&api, &JsValue::from_str("render"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((api, render))
}

fn mount_widget(
    target: &HtmlElement,
    site_key: &str,
    callback: &Function,
    rendered: &UseStateHandle<bool>,
) {
    match render_widget(target, site_key, callback) {
        Ok(()) => rendered.set(true),
        Err(err) => console::error!("captcha render failed", err),
    }
}

fn render_widget(target: &HtmlElement, site_key: &str, callback: &Function) -> Result<(), JsValue> {
    let (api, render) =
        grecaptcha_render().ok_or_else(|| JsValue::from_str("grecaptcha unavailable"))?;
    let params = Object::new();
    Reflect::set(&params, &JsValue::from_str("sitekey"), &JsValue::from_str(site_key))?;
    Reflect::set(&params, &JsValue::from_str("callback"), callback)?;
    render.call2(&api, target, &params)?;
    Ok(())
}

fn inject_loader() {
    let doc = document();
    if doc.get_element_by_id(SCRIPT_ID).is_some() {
        return;
    }
    let script = match doc
        .create_element("script")
        .map(|element| element.unchecked_into::<HtmlScriptElement>())
    {
        Ok(script) => script,
        Err(err) => {
            console::error!("captcha loader creation failed", err);
            return;
        }
    };
    script.set_id(SCRIPT_ID);
    script.set_src(SCRIPT_SRC);
    script.set_async(true);
    script.set_defer(true);
    let Some(head) = doc.head() else {
        console::error!("captcha loader injection failed", "document has no head");
        return;
    };
    if let Err(err) = head.append_child(&script) {
        console::error!("captcha loader injection failed", err);
    }
}
