//! Sign-in screen shown whenever there is no session.

use dioxus::prelude::*;

use crate::{
    auth::{now_unix, sign_in},
    domain::{AppState, UserType},
    infra::{
        fallback::{DEMO_EMAIL, DEMO_PASSWORD},
        ApiClient, LocalStorage,
    },
    ui::{
        components::toast::{push_toast, ToastKind, Toasts},
        theme,
    },
    util::{
        assets,
        version::{version_label, APP_NAME, APP_TAGLINE},
    },
};

#[component]
pub fn LoginPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Toasts>();
    let client = use_context::<ApiClient>();
    let storage = use_context::<LocalStorage>();

    let mut email = use_signal(|| DEMO_EMAIL.to_string());
    let mut password = use_signal(|| DEMO_PASSWORD.to_string());
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // The login page has no user yet, so it uses the default palette.
    let role = UserType::default();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);

        let client = client.clone();
        let storage = storage.clone();
        let (email, password) = (email(), password());
        let mut state = state;
        spawn(async move {
            match sign_in(&client, &storage, email.trim(), &password, now_unix()).await {
                Ok(session) => {
                    let greeting = session
                        .user
                        .as_ref()
                        .map(|user| user.display_name().to_string())
                        .unwrap_or_default();
                    state.with_mut(|st| st.session = session);
                    push_toast(toasts, ToastKind::Success, format!("Welcome back, {greeting}!"));
                }
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "flex min-h-screen items-center justify-center p-8",
            div {
                class: "w-full max-w-md",
                div { class: "mb-8 text-center",
                    img { class: "mx-auto mb-4 h-16 w-16", src: assets::logo_data_uri(), alt: "{APP_NAME} logo" }
                    h1 { class: "mb-2 text-4xl font-bold text-slate-100", "{APP_NAME}" }
                    p { class: "text-slate-400", "{APP_TAGLINE}" }
                }

                form {
                    class: "{theme::panel_border(role)} space-y-4 p-6",
                    onsubmit: on_submit,
                    if let Some(message) = error() {
                        div { class: "{theme::error_banner()}", "{message}" }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Email" }
                        input {
                            class: "{theme::input_class(role)}",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Password" }
                        input {
                            class: "{theme::input_class(role)}",
                            r#type: "password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        class: "w-full {theme::btn_primary(role)}",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Signing in..." } else { "Sign In" }
                    }
                    div { class: "{theme::info_banner()}",
                        p { class: "font-semibold", "Demo credentials" }
                        p { "Email: {DEMO_EMAIL}" }
                        p { "Password: {DEMO_PASSWORD}" }
                    }
                }

                p { class: "mt-6 text-center text-xs text-slate-600", "{version_label()}" }
            }
        }
    }
}
