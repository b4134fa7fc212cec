//! Authentication actions that talk to the backend and report through the store.

use crate::core::session::AuthRequest;
use crate::core::store::{AppStore, AuthOutcome, RequestId};
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yewdux::prelude::Dispatch;

/// Issue a request id, mark it pending, and resolve it once the backend answers.
pub(crate) fn auth_user(
    dispatch: &Dispatch<AppStore>,
    client: Rc<ApiClient>,
    request: AuthRequest,
) -> RequestId {
    let mut store = (*dispatch.get()).clone();
    let id = store.user.issue_request();
    dispatch.set(store);
    console::info!(
        "auth request dispatched",
        request.role.as_str(),
        request.mode.as_str(),
        id.value().to_string()
    );

    let dispatch = dispatch.clone();
    spawn_local(async move {
        let result = client
            .authenticate(&request.fields, request.role, request.mode)
            .await;
        let outcome = AuthOutcome::from_result(result);
        dispatch.reduce_mut(move |store| {
            if !store.user.resolve(id, outcome) {
                console::info!("auth result superseded", id.value().to_string());
            }
        });
    });
    id
}
