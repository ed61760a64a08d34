use crate::components::{use_click_scope, Icon, IconName};
use crate::config::{use_theme, Palette};
use crate::models::Track;
use crate::utils::NumberFormat;
use dioxus::prelude::*;

/// Compact vertical card for the trending rail.
#[component]
pub fn TrendingItem(
    track: Track,
    image_url: Option<String>,
    #[props(default)] format_number: NumberFormat,
    on_play: EventHandler<Track>,
    on_add_to_queue: Option<EventHandler<Track>>,
) -> Element {
    let palette = Palette::new(use_theme());
    let scope = use_click_scope();

    let artwork = image_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| track.image.clone());
    let badge_class = if track.is_liked {
        "text-red-500 fill-red-500"
    } else {
        "text-white"
    };
    let muted = palette.text_muted();

    rsx! {
        div {
            class: "trending-item flex-shrink-0 w-40 group cursor-pointer relative",
            onclick: {
                let track = track.clone();
                scope.primary(move || on_play.call(track.clone()))
            },
            div { class: "relative mb-2",
                img {
                    src: "{artwork}",
                    alt: "{track.name}",
                    class: "w-full h-40 rounded-lg object-cover",
                    loading: "lazy",
                }
                div { class: "absolute inset-0 bg-black/60 rounded-lg flex items-center justify-center opacity-0 group-hover:opacity-100 group-active:opacity-100 transition-opacity",
                    Icon { name: IconName::Play, class: "w-6 h-6 text-white" }
                }
                div { class: "absolute top-2 right-2 bg-black/70 rounded-full p-1",
                    Icon {
                        name: if track.is_liked { IconName::HeartFilled } else { IconName::Heart },
                        class: "like-indicator w-4 h-4 {badge_class}",
                    }
                }
                if let Some(on_add_to_queue) = on_add_to_queue {
                    div { class: "absolute bottom-2 right-2 opacity-0 group-hover:opacity-100 transition-opacity",
                        button {
                            class: "add-to-queue-btn bg-purple-500 hover:bg-purple-600 rounded-full p-2 shadow-lg transition-colors",
                            title: "Add to Queue",
                            onclick: {
                                let track = track.clone();
                                scope.action(move || on_add_to_queue.call(track.clone()))
                            },
                            Icon { name: IconName::ListPlus, class: "w-3.5 h-3.5 text-white" }
                        }
                    }
                }
            }
            div {
                h3 { class: "font-medium {palette.text_primary()} truncate text-sm", "{track.name}" }
                p { class: "{palette.text_secondary()} text-xs truncate", "{track.artist}" }
                div { class: "flex items-center justify-between mt-1",
                    div { class: "flex items-center space-x-1",
                        Icon { name: IconName::Eye, class: "w-2.5 h-2.5 {muted}" }
                        span { class: "{muted} text-xs", "{format_number.format(track.views)}" }
                    }
                    span { class: "{muted} text-xs", "{track.language}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{record, render, sample_track, take_calls, Interaction};
    use dioxus_html::SerializedMouseData;

    #[test]
    fn badge_follows_like_flag() {
        fn liked() -> Element {
            rsx! {
                TrendingItem { track: sample_track("t1", true), on_play: move |_| {} }
            }
        }
        fn neutral() -> Element {
            rsx! {
                TrendingItem { track: sample_track("t1", false), on_play: move |_| {} }
            }
        }
        assert!(render(liked).contains("text-red-500 fill-red-500"));
        assert!(!render(neutral).contains("text-red-500"));
    }

    #[test]
    fn queue_button_needs_handler() {
        fn without() -> Element {
            rsx! {
                TrendingItem { track: sample_track("t1", false), on_play: move |_| {} }
            }
        }
        fn with() -> Element {
            rsx! {
                TrendingItem {
                    track: sample_track("t1", false),
                    on_play: move |_| {},
                    on_add_to_queue: move |_| {},
                }
            }
        }
        assert!(!render(without).contains("add-to-queue-btn"));
        assert!(render(with).contains("add-to-queue-btn"));
    }

    #[test]
    fn explicit_image_url_wins_over_track_artwork() {
        fn root() -> Element {
            rsx! {
                TrendingItem {
                    track: sample_track("t1", false),
                    image_url: "/cache/t1.webp".to_string(),
                    on_play: move |_| {},
                }
            }
        }
        let html = render(root);
        assert!(html.contains("/cache/t1.webp"));
        assert!(!html.contains("/covers/t1.jpg"));
    }

    #[test]
    fn queue_button_click_never_also_plays() {
        fn root() -> Element {
            rsx! {
                TrendingItem {
                    track: sample_track("t1", false),
                    on_play: move |t: Track| record(format!("play {}", t.id)),
                    on_add_to_queue: move |t: Track| record(format!("queue {}", t.id)),
                }
            }
        }
        let mut card = Interaction::mount(root);
        let targets = card.targets("click");
        assert_eq!(targets.len(), 2);

        let mut outcomes = Vec::new();
        for target in targets {
            card.dispatch("click", target, SerializedMouseData::default());
            outcomes.push(take_calls());
        }
        outcomes.sort();
        assert_eq!(outcomes, [vec!["play t1".to_string()], vec!["queue t1".to_string()]]);
    }
}
