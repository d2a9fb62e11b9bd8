use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::auth_screens::{ForgotPasswordScreen, LoginScreen, RegisterScreen, ResetPasswordScreen};
use super::dashboard_page::DashboardPage;
use super::toast::ToastHost;
use super::ApiHandle;
use crate::api::BrowserClient;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::User;
use crate::screen::Screen;
use crate::session::{LocalStorage, Session};

fn entry_screen() -> Screen {
    let location = web_sys::window().map(|window| window.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_default();
    let search = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    let has_session = Session::new(LocalStorage).is_authenticated();
    Screen::initial(&path, &search, has_session)
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastHost>
            <Root />
        </ToastHost>
    }
}

#[function_component(Root)]
fn root() -> Html {
    let screen = use_state(entry_screen);
    let user = use_state(|| Session::new(LocalStorage).user());

    let client = {
        let screen = screen.clone();
        let user = user.clone();
        use_memo(
            move |_| {
                let client = BrowserClient::browser(&AppConfig::from_env()).with_unauthorized_hook(
                    move || {
                        user.set(None);
                        screen.set(Screen::Login);
                    },
                );
                ApiHandle::new(client)
            },
            (),
        )
    };

    {
        let client = (*client).clone();
        let current = (*screen).clone();
        let screen = screen.clone();
        let user = user.clone();
        use_effect_with_deps(
            move |current: &Screen| {
                if *current == Screen::Checking {
                    spawn_local(async move {
                        match client.me().await {
                            Ok(profile) => {
                                user.set(Some(profile));
                                screen.set(Screen::Dashboard);
                            }
                            Err(ApiError::Unauthorized) => {}
                            Err(err) => {
                                tracing::warn!(error = %err, "could not verify session, using stored profile");
                                screen.set(Screen::Dashboard);
                            }
                        }
                    });
                }
                || ()
            },
            current,
        );
    }

    let on_navigate = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| screen.set(next))
    };

    let on_authenticated = {
        let screen = screen.clone();
        let user = user.clone();
        Callback::from(move |profile: User| {
            user.set(Some(profile));
            screen.set(Screen::Dashboard);
        })
    };

    let on_logout = {
        let client = (*client).clone();
        let screen = screen.clone();
        let user = user.clone();
        Callback::from(move |_| {
            client.logout();
            user.set(None);
            screen.set(Screen::Login);
        })
    };

    let view = match &*screen {
        Screen::Checking => html! {
            <div class="min-h-screen flex items-center justify-center bg-slate-50 text-slate-500">
                {"Checking session..."}
            </div>
        },
        Screen::Login => html! {
            <LoginScreen on_navigate={on_navigate} on_authenticated={on_authenticated} />
        },
        Screen::Register => html! {
            <RegisterScreen on_navigate={on_navigate} on_authenticated={on_authenticated} />
        },
        Screen::ForgotPassword => html! {
            <ForgotPasswordScreen on_navigate={on_navigate} />
        },
        Screen::ResetPassword { token } => html! {
            <ResetPasswordScreen token={token.clone()} on_navigate={on_navigate} />
        },
        Screen::Dashboard => html! {
            <DashboardPage user={(*user).clone()} on_logout={on_logout} />
        },
    };

    html! {
        <ContextProvider<ApiHandle> context={(*client).clone()}>
            { view }
        </ContextProvider<ApiHandle>>
    }
}
