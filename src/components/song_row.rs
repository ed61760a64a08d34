use crate::components::{use_click_scope, Icon, IconName};
use crate::config::{use_theme, Palette};
use crate::models::Track;
use crate::utils::NumberFormat;
use dioxus::prelude::*;

/// Card-style list item for one track.
///
/// Clicking the body plays the track. Remove, add-to-playlist and the
/// add-to-queue menu are capabilities: each control exists only when its
/// handler is supplied.
#[component]
pub fn SongRow(
    track: Track,
    image_url: Option<String>,
    #[props(default)] format_number: NumberFormat,
    on_play: EventHandler<Track>,
    on_remove: Option<EventHandler<()>>,
    on_add_to_playlist: Option<EventHandler<Track>>,
    on_add_to_queue: Option<EventHandler<Track>>,
) -> Element {
    let palette = Palette::new(use_theme());
    let scope = use_click_scope();
    let mut menu_open = use_signal(|| false);

    let artwork = image_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| track.image.clone());
    let like_class = palette.like_indicator(track.is_liked);
    let muted = palette.text_muted();
    let press = palette.press();

    let on_row_click = {
        let track = track.clone();
        scope.primary(move || on_play.call(track.clone()))
    };

    rsx! {
        div {
            class: "song-row flex items-center p-3 sm:p-4 {palette.card()} rounded-lg transition-all group cursor-pointer",
            onclick: on_row_click,
            div { class: "relative mr-3",
                if artwork.is_empty() {
                    div { class: "w-12 h-12 sm:w-14 sm:h-14 rounded-lg bg-gray-700 flex items-center justify-center",
                        Icon { name: IconName::Music, class: "w-5 h-5 text-gray-400" }
                    }
                } else {
                    img {
                        src: "{artwork}",
                        alt: "{track.name}",
                        class: "w-12 h-12 sm:w-14 sm:h-14 rounded-lg object-cover",
                        loading: "lazy",
                    }
                }
                div { class: "absolute inset-0 bg-black/60 rounded-lg flex items-center justify-center opacity-0 group-active:opacity-100 transition-opacity",
                    Icon { name: IconName::Play, class: "w-4 h-4 text-white" }
                }
            }

            div { class: "flex-1 min-w-0",
                h3 { class: "font-medium text-sm sm:text-base {palette.text_primary()} truncate",
                    "{track.name}"
                }
                p { class: "{palette.text_secondary()} text-xs sm:text-sm truncate", "{track.artist}" }
                div { class: "flex items-center space-x-3 sm:space-x-4 mt-1",
                    div { class: "flex items-center space-x-1",
                        Icon { name: IconName::Eye, class: "w-2.5 h-2.5 {muted}" }
                        span { class: "{muted} text-xs", "{format_number.format(track.views)}" }
                    }
                    div { class: "flex items-center space-x-1",
                        Icon {
                            name: if track.is_liked { IconName::HeartFilled } else { IconName::Heart },
                            class: "like-indicator w-2.5 h-2.5 {like_class}",
                        }
                        span { class: "{muted} text-xs", "{format_number.format(track.likes)}" }
                    }
                    span { class: "{muted} text-xs hidden sm:inline", "{track.language}" }
                }
            }

            div { class: "flex items-center space-x-1 sm:space-x-2 ml-2 sm:ml-3",
                if let Some(on_remove) = on_remove {
                    button {
                        class: "remove-btn p-2 {press} rounded-full transition-colors text-red-400 active:text-red-300",
                        aria_label: "Remove",
                        onclick: scope.action(move || on_remove.call(())),
                        Icon { name: IconName::Close, class: "w-4 h-4" }
                    }
                }
                if let Some(on_add_to_playlist) = on_add_to_playlist {
                    button {
                        class: "add-to-playlist-btn p-2 {press} rounded-full transition-colors",
                        aria_label: "Add to playlist",
                        onclick: {
                            let track = track.clone();
                            scope.action(move || on_add_to_playlist.call(track.clone()))
                        },
                        Icon { name: IconName::Plus, class: "w-4 h-4 {palette.text_secondary()}" }
                    }
                }
                if let Some(on_add_to_queue) = on_add_to_queue {
                    div { class: "relative",
                        button {
                            class: "more-btn p-2 {press} rounded-full transition-colors",
                            aria_label: "More",
                            onclick: scope.action(move || menu_open.set(!menu_open())),
                            Icon { name: IconName::More, class: "w-4 h-4 {palette.text_secondary()}" }
                        }
                        if menu_open() {
                            div { class: "absolute right-0 top-12 {palette.menu()} border rounded-lg shadow-lg py-2 w-44 z-20",
                                button {
                                    class: "add-to-queue-item w-full text-left px-4 py-3 {palette.menu_item()} flex items-center transition-colors min-h-[44px]",
                                    onclick: {
                                        let track = track.clone();
                                        scope.action(move || {
                                            on_add_to_queue.call(track.clone());
                                            menu_open.set(false);
                                        })
                                    },
                                    Icon { name: IconName::ListPlus, class: "w-4 h-4 mr-3" }
                                    "Add to Queue"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
