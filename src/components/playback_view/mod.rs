use crate::components::{Icon, IconName, QueueList};
use crate::config::{use_theme, Palette};
use crate::models::{QueueEntry, QueueEntryId, Track};
use crate::utils::NumberFormat;
use dioxus::prelude::*;
use std::collections::HashMap;

mod controls;
mod scrub_bar;

use controls::{LikeButton, PlaybackHeader, TransportButtons};
use scrub_bar::{ScrubBar, VolumeControl};

/// Full-screen "now playing" surface.
///
/// Holds no playback state of its own beyond the overflow-menu flag and the
/// pending scrub value; everything else comes from the owner and every
/// interaction goes back to it through the handlers.
#[component]
pub fn PlaybackView(
    track: Track,
    is_playing: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    #[props(default)] is_seeking: bool,
    image_url: Option<String>,
    #[props(default)] format_number: NumberFormat,
    #[props(default)] queue: Vec<QueueEntry>,
    #[props(default)] image_urls: HashMap<String, String>,
    #[props(default = "Trending Now".to_string(), into)] playing_from: String,
    on_toggle_play: EventHandler<()>,
    on_minimize: EventHandler<()>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_toggle_like: EventHandler<()>,
    on_add_to_playlist: EventHandler<()>,
    on_seek: EventHandler<f64>,
    on_seeking: EventHandler<bool>,
    on_volume: EventHandler<f64>,
    on_remove_from_queue: Option<EventHandler<QueueEntryId>>,
    on_play_track: Option<EventHandler<Track>>,
    on_clear_queue: Option<EventHandler<()>>,
    on_share: Option<EventHandler<()>>,
) -> Element {
    let palette = Palette::new(use_theme());
    let artwork = image_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| track.image.clone());

    let queue_handlers = match (on_remove_from_queue, on_play_track) {
        (Some(on_remove), Some(on_play)) if !queue.is_empty() => Some((on_remove, on_play)),
        _ => None,
    };

    rsx! {
        div { class: "playback-view fixed inset-0 {palette.surface()} z-50 flex flex-col",
            PlaybackHeader {
                playing_from,
                palette,
                on_minimize,
                on_add_to_playlist,
                on_share,
            }

            div { class: "flex-1 overflow-y-auto px-4",
                div { class: "max-h-full",
                    // Album art
                    div { class: "flex justify-center py-4 sm:py-6",
                        div { class: "relative w-64 h-64 sm:w-72 sm:h-72",
                            if artwork.is_empty() {
                                div { class: "w-full h-full rounded-xl sm:rounded-2xl flex items-center justify-center bg-gradient-to-br from-purple-600 to-gray-800 shadow-2xl",
                                    Icon { name: IconName::Music, class: "w-16 h-16 text-white/70" }
                                }
                            } else {
                                img {
                                    src: "{artwork}",
                                    alt: "{track.name}",
                                    class: "w-full h-full rounded-xl sm:rounded-2xl object-cover shadow-2xl",
                                }
                            }
                            div { class: "absolute inset-0 bg-gradient-to-t from-black/20 to-transparent rounded-xl sm:rounded-2xl" }
                        }
                    }

                    // Track info
                    div { class: "text-center mb-4 sm:mb-6 px-4",
                        h1 { class: "text-xl sm:text-2xl font-bold {palette.text_primary()} mb-2 leading-tight",
                            "{track.name}"
                        }
                        p { class: "{palette.text_secondary()} text-base sm:text-lg", "{track.artist}" }
                        if !track.language.is_empty() {
                            div { class: "flex items-center justify-center space-x-2 mt-2",
                                span { class: "{palette.chip()} text-xs sm:text-sm px-3 py-1 rounded-full",
                                    "{track.language}"
                                }
                            }
                        }
                    }

                    // Stats
                    div { class: "mb-4 sm:mb-6",
                        div { class: "flex items-center justify-center space-x-6",
                            div { class: "flex items-center space-x-1",
                                Icon { name: IconName::Eye, class: "w-3.5 h-3.5 {palette.text_secondary()}" }
                                span { class: "{palette.text_secondary()} text-xs sm:text-sm",
                                    "{format_number.format(track.views)}"
                                }
                            }
                            div { class: "flex items-center space-x-1",
                                Icon {
                                    name: if track.is_liked { IconName::HeartFilled } else { IconName::Heart },
                                    class: "like-indicator w-3.5 h-3.5 {palette.like_indicator(track.is_liked)}",
                                }
                                span { class: "{palette.text_secondary()} text-xs sm:text-sm",
                                    "{format_number.format(track.likes)}"
                                }
                            }
                        }
                    }

                    ScrubBar {
                        current_time,
                        duration,
                        is_seeking,
                        palette,
                        on_seek,
                        on_seeking,
                    }

                    TransportButtons {
                        is_playing,
                        palette,
                        on_previous,
                        on_toggle_play,
                        on_next,
                    }

                    div { class: "pb-6 sm:pb-8 px-2",
                        div { class: "flex items-center justify-between space-x-4",
                            LikeButton { liked: track.is_liked, palette, on_toggle_like }
                            VolumeControl { volume, palette, on_volume }
                        }
                    }
                }

                if let Some((on_remove, on_play)) = queue_handlers {
                    QueueList {
                        queue: queue.clone(),
                        on_remove,
                        on_play,
                        image_urls: image_urls.clone(),
                        on_clear: on_clear_queue,
                    }
                }
            }
        }
    }
}
