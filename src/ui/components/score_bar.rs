use dioxus::prelude::*;

use crate::domain::percent_label;

/// Bar colour by score band.
fn bar_color(score: f64) -> &'static str {
    if score >= 0.8 {
        "bg-emerald-500"
    } else if score >= 0.6 {
        "bg-amber-500"
    } else {
        "bg-rose-500"
    }
}

#[component]
pub fn ScoreBar(label: String, score: f64) -> Element {
    let width = (score.clamp(0.0, 1.0) * 100.0).round();
    let percent = percent_label(score);

    rsx! {
        div { class: "space-y-1",
            div { class: "flex items-center justify-between text-sm",
                span { class: "text-slate-300", "{label}" }
                span { class: "font-semibold text-slate-100", "{percent}" }
            }
            div { class: "h-2 w-full overflow-hidden rounded-full bg-slate-800",
                div {
                    class: "h-2 rounded-full {bar_color(score)}",
                    style: "width: {width}%",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_bands() {
        assert_eq!(bar_color(0.85), "bg-emerald-500");
        assert_eq!(bar_color(0.6), "bg-amber-500");
        assert_eq!(bar_color(0.2), "bg-rose-500");
    }
}
