use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::icons::icon_arrow_left;
use super::{bind_value, use_api, use_notifier};
use crate::auth::{login_failure, LoginForm, RegistrationForm, ResetForm};
use crate::models::User;
use crate::screen::Screen;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-slate-50 border border-slate-200 rounded-xl text-slate-900 focus:outline-none focus:ring-2 focus:ring-blue-500";
const BUTTON_CLASS: &str = "w-full bg-blue-600 text-white py-3 rounded-xl font-bold hover:bg-blue-700 transition-colors disabled:opacity-50";
const LINK_CLASS: &str = "text-blue-600 font-semibold hover:underline";

fn auth_card(title: &'static str, subtitle: &'static str, body: Html, footer: Html) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50 p-4">
            <div class="w-full max-w-md bg-white border border-slate-100 rounded-2xl shadow-xl p-8">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-extrabold text-slate-900">{ title }</h1>
                    <p class="text-sm text-slate-500 mt-2">{ subtitle }</p>
                </div>
                { body }
                <div class="mt-6 text-center text-sm text-slate-500">{ footer }</div>
            </div>
        </div>
    }
}

fn field(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    state: &UseStateHandle<String>,
) -> Html {
    html! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-slate-700">{ label }</label>
            <input
                type={input_type}
                class={INPUT_CLASS}
                placeholder={placeholder}
                value={(**state).clone()}
                oninput={bind_value(state)}
                required={true}
            />
        </div>
    }
}

fn nav_link(label: &'static str, target: Screen, on_navigate: &Callback<Screen>) -> Html {
    let on_navigate = on_navigate.clone();
    let onclick = Callback::from(move |_| on_navigate.emit(target.clone()));
    html! {
        <button type="button" class={LINK_CLASS} onclick={onclick}>{ label }</button>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub on_navigate: Callback<Screen>,
    pub on_authenticated: Callback<User>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &AuthScreenProps) -> Html {
    let client = use_api();
    let notifier = use_notifier();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let loading = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = LoginForm {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let credentials = match form.validate() {
                Ok(credentials) => credentials,
                Err(err) => {
                    notifier.error(err.to_string());
                    return;
                }
            };

            loading.set(true);
            let client = client.clone();
            let notifier = notifier.clone();
            let loading = loading.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                match client.login(&credentials).await {
                    Ok(auth) => {
                        notifier.success("Welcome back!");
                        on_authenticated.emit(auth.user);
                    }
                    Err(err) => notifier.error(login_failure(&err)),
                }
                loading.set(false);
            });
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    let body = html! {
        <form class="space-y-5" onsubmit={on_submit}>
            { field("Email Address", "email", "Enter your email", &email) }
            <div class="space-y-1">
                <div class="flex items-center justify-between">
                    <label class="block text-sm font-medium text-slate-700">{"Password"}</label>
                    { nav_link("Forgot password?", Screen::ForgotPassword, &props.on_navigate) }
                </div>
                <div class="relative">
                    <input
                        type={if *show_password { "text" } else { "password" }}
                        class={INPUT_CLASS}
                        placeholder="Enter your password"
                        value={(*password).clone()}
                        oninput={bind_value(&password)}
                        required={true}
                    />
                    <button type="button" class="absolute right-3 top-3 text-xs font-bold text-slate-400" onclick={toggle_password}>
                        { if *show_password { "Hide" } else { "Show" } }
                    </button>
                </div>
            </div>
            <button type="submit" class={BUTTON_CLASS} disabled={*loading}>
                { if *loading { "Signing in..." } else { "Sign In" } }
            </button>
        </form>
    };

    let footer = html! {
        <>
            { "Don't have an account? " }
            { nav_link("Register here", Screen::Register, &props.on_navigate) }
        </>
    };

    auth_card("Welcome Back", "Sign in to manage your money.", body, footer)
}

#[function_component(RegisterScreen)]
pub fn register_screen(props: &AuthScreenProps) -> Html {
    let client = use_api();
    let notifier = use_notifier();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let loading = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = RegistrationForm {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm_password).clone(),
            };
            let registration = match form.validate() {
                Ok(registration) => registration,
                Err(err) => {
                    notifier.error(err.to_string());
                    return;
                }
            };

            loading.set(true);
            let client = client.clone();
            let notifier = notifier.clone();
            let loading = loading.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                match client.register(&registration).await {
                    Ok(auth) => {
                        notifier.success("Account created successfully!");
                        on_authenticated.emit(auth.user);
                    }
                    Err(err) => notifier.api_error(&err, "Registration failed"),
                }
                loading.set(false);
            });
        })
    };

    let body = html! {
        <form class="space-y-4" onsubmit={on_submit}>
            { field("Full Name", "text", "Enter your full name", &name) }
            { field("Email Address", "email", "Enter your email address", &email) }
            { field("Password", "password", "Enter your password", &password) }
            { field("Confirm Password", "password", "Confirm your password", &confirm_password) }
            <button type="submit" class={BUTTON_CLASS} disabled={*loading}>
                { if *loading { "Creating account..." } else { "Create Account" } }
            </button>
        </form>
    };

    let footer = html! {
        <>
            { "Already have an account? " }
            { nav_link("Sign in", Screen::Login, &props.on_navigate) }
        </>
    };

    auth_card("Create Account", "Start tracking your income and expenses.", body, footer)
}

#[derive(Properties, PartialEq)]
pub struct ForgotPasswordProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(ForgotPasswordScreen)]
pub fn forgot_password_screen(props: &ForgotPasswordProps) -> Html {
    let client = use_api();
    let notifier = use_notifier();
    let email = use_state(String::new);
    let loading = use_state(|| false);
    let requested = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let loading = loading.clone();
        let requested = requested.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.trim().is_empty() {
                notifier.error("Email is required");
                return;
            }

            loading.set(true);
            let address = (*email).clone();
            let client = client.clone();
            let notifier = notifier.clone();
            let loading = loading.clone();
            let requested = requested.clone();
            spawn_local(async move {
                match client.forgot_password(&address).await {
                    Ok(response) => {
                        // Reset codes are delivered by email only.
                        if response.token.is_some() {
                            tracing::warn!("password reset response carried a token; ignoring it");
                        }
                        notifier.success("Reset instruction generated!");
                        requested.set(true);
                    }
                    Err(err) => notifier.api_error(&err, "Failed to request reset"),
                }
                loading.set(false);
            });
        })
    };

    let body = if *requested {
        html! {
            <div class="space-y-4 text-center">
                <p class="text-sm text-slate-600">
                    {"If the address is registered, a reset code is on its way. Enter it on the next screen."}
                </p>
                { nav_link("I have a code", Screen::ResetPassword { token: String::new() }, &props.on_navigate) }
            </div>
        }
    } else {
        html! {
            <form class="space-y-5" onsubmit={on_submit}>
                { field("Email Address", "email", "name@company.com", &email) }
                <button type="submit" class={BUTTON_CLASS} disabled={*loading}>
                    { if *loading { "Sending..." } else { "Reset Password" } }
                </button>
            </form>
        }
    };

    let back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Screen::Login))
    };
    let footer = html! {
        <button type="button" class="inline-flex items-center gap-2 text-slate-500 hover:text-slate-700" onclick={back}>
            { icon_arrow_left() }
            <span>{"Back to login"}</span>
        </button>
    };

    auth_card("Forgot Password", "We'll help you get back into your account.", body, footer)
}

#[derive(Properties, PartialEq)]
pub struct ResetPasswordProps {
    pub token: String,
    pub on_navigate: Callback<Screen>,
}

#[function_component(ResetPasswordScreen)]
pub fn reset_password_screen(props: &ResetPasswordProps) -> Html {
    let client = use_api();
    let notifier = use_notifier();
    let token = use_state(|| props.token.clone());
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let loading = use_state(|| false);
    let token_from_link = !props.token.is_empty();

    let on_submit = {
        let token = token.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let loading = loading.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ResetForm {
                token: (*token).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm_password).clone(),
            };
            let reset = match form.validate() {
                Ok(reset) => reset,
                Err(err) => {
                    notifier.error(err.to_string());
                    return;
                }
            };

            loading.set(true);
            let client = client.clone();
            let notifier = notifier.clone();
            let loading = loading.clone();
            let on_navigate = on_navigate.clone();
            spawn_local(async move {
                match client.reset_password(&reset).await {
                    Ok(()) => {
                        notifier.success("Password reset successfully!");
                        on_navigate.emit(Screen::Login);
                    }
                    Err(err) => notifier.api_error(&err, "Reset failed"),
                }
                loading.set(false);
            });
        })
    };

    let body = html! {
        <form class="space-y-4" onsubmit={on_submit}>
            <div class="space-y-1">
                <label class="block text-sm font-medium text-slate-700">{"Reset Code"}</label>
                <input
                    type="text"
                    class={INPUT_CLASS}
                    placeholder="Enter 4-digit code"
                    value={(*token).clone()}
                    oninput={bind_value(&token)}
                    readonly={token_from_link}
                    required={true}
                />
            </div>
            { field("New Password", "password", "••••••••", &password) }
            { field("Confirm Password", "password", "••••••••", &confirm_password) }
            <button type="submit" class={BUTTON_CLASS} disabled={*loading}>
                { if *loading { "Updating..." } else { "Update Password" } }
            </button>
        </form>
    };

    let footer = nav_link("Back to login", Screen::Login, &props.on_navigate);

    auth_card("Reset Password", "Choose a new password for your account.", body, footer)
}
