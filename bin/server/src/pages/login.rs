//! Login page component.
//!
//! Markup only. What is shown and what the buttons do comes from
//! [`LoginView`] and the [`LoginScreen`] it resolves.

use crate::auth::ServerFnAuthService;
use crate::notifications::NotificationCenter;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use samcast_admin_login::{
    AuthService, Credentials, LoadingFlag, LoginScreen, LoginView, NavigateOptions, RetryPanel,
    ServerStatus, SignInForm, ViewState, copy,
};
use std::rc::Rc;

/// Email/password sign-in, or the retry panel while the backend is down.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<ServerFnAuthService>();
    let notifications = expect_context::<NotificationCenter>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let navigator = move |path: &str, options: NavigateOptions| {
        navigate(
            path,
            leptos_router::NavigateOptions {
                replace: options.replace,
                ..Default::default()
            },
        );
    };
    let flag = LoadingFlag::new().with_observer(move |busy| {
        loading.try_set(busy);
    });
    let login = StoredValue::new_local(
        LoginView::new(Rc::new(auth), Rc::new(notifications), Rc::new(navigator))
            .with_loading_flag(flag),
    );

    let screen = Memo::new(move |_| {
        let state = ViewState {
            loading: loading.get(),
            server_error: auth.server_error(),
        };
        LoginScreen::resolve(state, &Credentials::new(email.get(), password.get()))
    });
    let unavailable = Memo::new(move |_| screen.get().shows_retry());

    // Effects only run in the browser, once per mount.
    Effect::new(move || {
        let login = login.get_value();
        spawn_local(async move {
            login.refresh_server_status().await;
        });
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let login = login.get_value();
        spawn_local(async move {
            login.submit(&credentials).await;
        });
    };

    let on_retry = move |_: ev::MouseEvent| {
        let login = login.get_value();
        spawn_local(async move {
            login.retry_connection().await;
        });
    };

    view! {
        <div class="login-page">
            {move || {
                if unavailable.get() {
                    view! { <ErrorState screen=screen on_retry=on_retry/> }.into_any()
                } else {
                    view! {
                        <FormState
                            screen=screen
                            email=email
                            password=password
                            on_submit=on_submit
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn sign_in_form(screen: LoginScreen) -> Option<SignInForm> {
    match screen {
        LoginScreen::SignIn(form) => Some(form),
        LoginScreen::ServerUnavailable(_) => None,
    }
}

fn retry_panel(screen: LoginScreen) -> Option<RetryPanel> {
    match screen {
        LoginScreen::ServerUnavailable(panel) => Some(panel),
        LoginScreen::SignIn(_) => None,
    }
}

fn status_class(status: ServerStatus) -> &'static str {
    if status.is_online() {
        "status-dot status-online"
    } else {
        "status-dot status-checking"
    }
}

#[component]
fn FormState(
    screen: Memo<LoginScreen>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    on_submit: impl Fn(ev::SubmitEvent) + 'static,
) -> impl IntoView {
    let form = move || sign_in_form(screen.get());
    let status = move || form().map_or(ServerStatus::Online, |form| form.status);

    view! {
        <div class="login-box">
            <header class="login-header">
                <h1>"Gerenciamento Administrativo"</h1>
                <p class="login-subtitle">"Painel Administrativo de Streaming"</p>
                <p class="login-secure">"Acesso seguro e protegido"</p>
            </header>

            <form class="login-form" on:submit=on_submit>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    autocomplete="username"
                    placeholder="Digite seu email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />

                <label for="password">"Senha"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    placeholder="Digite sua senha"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />

                <button
                    type="submit"
                    class="login-button"
                    disabled=move || !form().is_some_and(|form| form.submit_enabled)
                >
                    {move || form().map_or(copy::SUBMIT_LABEL, |form| form.submit_label)}
                </button>
            </form>

            <footer class="login-footer">
                <span class=move || status_class(status())></span>
                <span>{move || status().label()}</span>
                <p class="powered-by">"Powered by Wcore Tecnologia"</p>
            </footer>
        </div>
    }
}

#[component]
fn ErrorState(
    screen: Memo<LoginScreen>,
    on_retry: impl Fn(ev::MouseEvent) + 'static,
) -> impl IntoView {
    let panel = move || retry_panel(screen.get());
    let status = move || panel().map_or(ServerStatus::Checking, |panel| panel.status);

    view! {
        <div class="login-box server-unavailable">
            <h1>{copy::HEALTH_DOWN_TITLE}</h1>
            <p>{copy::SERVER_UNAVAILABLE_MESSAGE}</p>

            <button
                type="button"
                class="retry-button"
                disabled=move || !panel().is_some_and(|panel| panel.retry_enabled)
                on:click=on_retry
            >
                {move || panel().map_or(copy::RETRY_LABEL, |panel| panel.retry_label)}
            </button>

            <p class="support-hint">{copy::SUPPORT_HINT}</p>

            <footer class="login-footer">
                <span class=move || status_class(status())></span>
                <span>{move || status().label()}</span>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_and_panel_are_exclusive() {
        let filled = Credentials::new("admin@samcast.com.br", "segredo");

        let online = LoginScreen::resolve(ViewState::default(), &filled);
        assert!(sign_in_form(online).is_some_and(|form| form.submit_enabled));
        assert!(retry_panel(online).is_none());

        let down = LoginScreen::resolve(
            ViewState {
                loading: false,
                server_error: true,
            },
            &filled,
        );
        assert!(sign_in_form(down).is_none());
        assert!(retry_panel(down).is_some_and(|panel| panel.retry_enabled));
    }

    #[test]
    fn status_dot_follows_reachability() {
        assert_eq!(status_class(ServerStatus::Online), "status-dot status-online");
        assert_eq!(status_class(ServerStatus::Checking), "status-dot status-checking");
    }
}
