//! Transient message popup.
//!
//! # Design
//! - Visibility is owned by the caller; the popup only asks to be dismissed.
//! - Each newly shown message restarts the auto-hide timer.

use crate::i18n::{DEFAULT_LOCALE, TextKey, TranslationBundle};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_HIDE_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub(crate) struct PopupProps {
    pub message: AttrValue,
    pub visible: bool,
    pub on_dismiss: Callback<()>,
}

#[function_component(Popup)]
pub(crate) fn popup(props: &PopupProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |(visible, _message): &(bool, AttrValue)| {
                let handle = visible
                    .then(|| Timeout::new(AUTO_HIDE_MS, move || on_dismiss.emit(())));
                move || drop(handle)
            },
            (props.visible, props.message.clone()),
        );
    }

    if !props.visible {
        return html! {};
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class="popup" role="alertdialog" aria-live="assertive">
            <span>{props.message.clone()}</span>
            <button
                type="button"
                class="ghost"
                aria-label={bundle.text(TextKey::PopupDismiss)}
                onclick={on_close}
            >{"✕"}</button>
        </div>
    }
}
