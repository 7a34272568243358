use dioxus::prelude::*;

use crate::app::Route;
use crate::auth::sign_out;
use crate::domain::{AppState, UserType};
use crate::infra::{ApiClient, LocalStorage};
use crate::ui::components::toast::{push_toast, ToastKind, Toasts};
use crate::ui::pages::LoginPage;
use crate::ui::theme;
use crate::util::{assets, version::APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();

    // Signed-out users only ever see the login screen.
    if !state.with(|st| st.session.is_authenticated()) {
        return rsx! {
            div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
                LoginPage {}
            }
        };
    }

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            Navbar {}
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Toasts>();
    let client = use_context::<ApiClient>();
    let storage = use_context::<LocalStorage>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);

    let role = state.with(|st| st.user_type());
    let (tier, initial, email) = state.with(|st| {
        let user = st.session.user.as_ref();
        (
            st.tier().to_uppercase(),
            user.map(|u| u.initial()).unwrap_or_default(),
            user.map(|u| u.email.clone()).unwrap_or_default(),
        )
    });

    let on_logout = move |_| {
        menu_open.set(false);
        let client = client.clone();
        let storage = storage.clone();
        spawn(async move {
            sign_out(&client, &storage).await;
            state.with_mut(|st| st.sign_out());
            push_toast(toasts, ToastKind::Info, "Signed out.");
            nav.replace(Route::Dashboard {});
        });
    };

    rsx! {
        header {
            class: "navbar border-b border-slate-900 bg-slate-950/90 px-6 py-4",
            div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                div { class: "flex items-center gap-3",
                    img { class: "h-8 w-8", src: assets::logo_data_uri(), alt: "{APP_NAME} logo" }
                    h1 { class: "text-xl font-semibold tracking-tight {theme::text_primary(role)}", "{APP_NAME}" }
                }

                nav { class: "flex items-center gap-2 text-sm",
                    NavButton {
                        active: matches!(current_route, Route::Dashboard {}),
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        label: "📊 Dashboard",
                        role,
                    }
                    NavButton {
                        active: matches!(current_route, Route::Evaluate {} | Route::Results { .. }),
                        onclick: move |_| { nav.push(Route::Evaluate {}); },
                        label: "🚀 Evaluate",
                        role,
                    }
                    NavButton {
                        active: matches!(current_route, Route::Matching {}),
                        onclick: move |_| { nav.push(Route::Matching {}); },
                        label: "🤝 Matching",
                        role,
                    }

                    span { class: "ml-2 {theme::btn_small_active(role)}", "{tier}" }

                    div { class: "relative ml-2",
                        button {
                            class: "flex h-9 w-9 items-center justify-center rounded-full bg-slate-800 font-semibold {theme::text_primary(role)}",
                            title: "{email}",
                            onclick: move |_| menu_open.set(!menu_open()),
                            "{initial}"
                        }
                        if menu_open() {
                            div {
                                class: "absolute right-0 mt-2 w-48 {theme::panel_solid()} p-2 shadow-lg",
                                button {
                                    class: "block w-full rounded px-3 py-2 text-left text-sm text-slate-300 hover:bg-slate-800",
                                    onclick: move |_| {
                                        menu_open.set(false);
                                        nav.push(Route::Privacy {});
                                    },
                                    "🔒 Privacy Center"
                                }
                                button {
                                    class: "block w-full rounded px-3 py-2 text-left text-sm text-rose-300 hover:bg-slate-800",
                                    onclick: on_logout,
                                    "Logout"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str, role: UserType) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(role, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
