use dioxus::prelude::*;

use crate::domain::UserType;
use crate::ui::theme;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    icon: &'static str,
    description: Option<String>,
    role: UserType,
) -> Element {
    rsx! {
        div {
            class: "{theme::panel_border(role)} p-4 shadow-sm",
            div { class: "flex items-center justify-between",
                h3 { class: "{theme::label_class()}", "{title}" }
                span { class: "text-lg", "{icon}" }
            }
            p { class: "mt-2 text-2xl font-semibold {theme::text_primary(role)}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted()}", "{desc}" }
            }
        }
    }
}
