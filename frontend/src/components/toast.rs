//! Transient notifications shown in the corner of the screen.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::error::ApiError;

const TOAST_TTL_MS: i32 = 4000;
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u32,
    kind: ToastKind,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ToastStack {
    next_id: u32,
    toasts: Vec<Toast>,
}

enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    kind,
                    message,
                });
                next.next_id = next.next_id.wrapping_add(1);
                if next.toasts.len() > MAX_TOASTS {
                    let excess = next.toasts.len() - MAX_TOASTS;
                    next.toasts.drain(..excess);
                }
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

/// Handle for raising notifications from any component.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    push: Callback<(ToastKind, String)>,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Error, message.into()));
    }

    /// Reports a failed call, unless it was a 401 that already redirected.
    pub fn api_error(&self, err: &ApiError, fallback: &str) {
        if let Some(message) = err.notification(fallback) {
            self.error(message);
        }
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| Notifier {
        push: Callback::from(|(_, message): (ToastKind, String)| {
            tracing::warn!(%message, "notification raised outside a toast host");
        }),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let stack = use_reducer(ToastStack::default);

    let notifier = {
        let dispatcher = stack.dispatcher();
        use_memo(
            move |_| Notifier {
                push: Callback::from(move |(kind, message): (ToastKind, String)| {
                    dispatcher.dispatch(ToastAction::Push(kind, message))
                }),
            },
            (),
        )
    };

    let on_dismiss = {
        let dispatcher = stack.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            <div class="fixed top-4 right-4 z-[60] w-80 space-y-2">
                { for stack.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                schedule(TOAST_TTL_MS, move || on_dismiss.emit(id));
                || ()
            },
            id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    let class_name = match props.toast.kind {
        ToastKind::Success => "px-4 py-3 rounded-xl shadow-lg text-sm font-semibold bg-emerald-50 text-emerald-700 border border-emerald-200 cursor-pointer",
        ToastKind::Error => "px-4 py-3 rounded-xl shadow-lg text-sm font-semibold bg-rose-50 text-rose-700 border border-rose-200 cursor-pointer",
    };

    html! {
        <div class={class_name} role="status" onclick={onclick}>
            { props.toast.message.clone() }
        </div>
    }
}

fn schedule(delay_ms: i32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    }
}
