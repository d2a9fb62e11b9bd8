use std::ops::Deref;
use std::rc::Rc;

use yew::prelude::*;

use crate::api::BrowserClient;
use crate::config::AppConfig;

mod accounts;
mod app;
mod auth_screens;
mod charts;
mod dashboard_page;
mod icons;
mod summary;
mod toast;
mod transaction_modal;
mod transactions;

pub use app::App;
pub use toast::{use_notifier, Notifier, ToastHost, ToastKind};

/// Shared API client, provided once at the root.
#[derive(Clone)]
pub struct ApiHandle(Rc<BrowserClient>);

impl ApiHandle {
    pub fn new(client: BrowserClient) -> Self {
        Self(Rc::new(client))
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ApiHandle {
    type Target = BrowserClient;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[hook]
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
        .unwrap_or_else(|| ApiHandle::new(BrowserClient::browser(&AppConfig::from_env())))
}

/// `oninput` handler that mirrors an input's value into a state handle.
fn bind_value(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

fn select_value(e: &Event) -> String {
    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

fn input_value(e: &InputEvent) -> String {
    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
    input.value()
}
