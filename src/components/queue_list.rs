use crate::components::{Icon, IconName};
use crate::config::{use_theme, Palette};
use crate::models::{QueueEntry, QueueEntryId, Track};
use dioxus::prelude::*;
use std::collections::HashMap;

const PLACEHOLDER_ART: &str = "/placeholder.png";

/// Entry ids to remove one by one when no batch clear is available.
/// Taken from the sequence as it was when the user pressed "clear".
pub fn clear_snapshot(queue: &[QueueEntry]) -> Vec<QueueEntryId> {
    queue.iter().map(|entry| entry.id.clone()).collect()
}

fn artwork_for(track: &Track, image_urls: &HashMap<String, String>) -> String {
    image_urls
        .get(&track.id)
        .filter(|url| !url.is_empty())
        .cloned()
        .or_else(|| Some(track.image.clone()).filter(|url| !url.is_empty()))
        .unwrap_or_else(|| PLACEHOLDER_ART.to_string())
}

fn song_count_label(len: usize) -> String {
    if len == 1 {
        "1 song".to_string()
    } else {
        format!("{len} songs")
    }
}

/// Upcoming tracks with their 1-based positions. Renders nothing when empty.
#[component]
pub fn QueueList(
    queue: Vec<QueueEntry>,
    on_remove: EventHandler<QueueEntryId>,
    on_play: EventHandler<Track>,
    #[props(default)] image_urls: HashMap<String, String>,
    on_clear: Option<EventHandler<()>>,
) -> Element {
    let palette = Palette::new(use_theme());

    if queue.is_empty() {
        return rsx! {};
    }

    let on_clear_click = {
        let snapshot = clear_snapshot(&queue);
        move |_| match on_clear {
            Some(on_clear) => on_clear.call(()),
            None => {
                for id in snapshot.iter() {
                    on_remove.call(id.clone());
                }
            }
        }
    };

    rsx! {
        div { class: "queue-list mt-4 sm:mt-6 px-2",
            div { class: "flex items-center justify-between mb-4",
                h3 { class: "text-base sm:text-lg font-semibold {palette.text_primary()}",
                    "Next in Queue"
                }
                span { class: "text-xs sm:text-sm {palette.text_secondary()}",
                    "{song_count_label(queue.len())}"
                }
            }

            div { class: "space-y-2 max-h-48 sm:max-h-64 overflow-y-auto",
                for (index , entry) in queue.iter().enumerate() {
                    div {
                        key: "{entry.id}",
                        class: "queue-row flex items-center p-3 {palette.queue_row()} rounded-lg transition-colors group",
                        div { class: "flex items-center mr-3 text-xs sm:text-sm font-mono w-6",
                            span { class: "queue-position {palette.text_muted()}", "{index + 1}" }
                        }
                        img {
                            src: artwork_for(&entry.track, &image_urls),
                            alt: "{entry.track.name}",
                            class: "w-10 h-10 sm:w-12 sm:h-12 rounded-md object-cover mr-3 cursor-pointer",
                            loading: "lazy",
                            onclick: {
                                let track = entry.track.clone();
                                move |_| on_play.call(track.clone())
                            },
                        }
                        div {
                            class: "flex-1 min-w-0 cursor-pointer",
                            onclick: {
                                let track = entry.track.clone();
                                move |_| on_play.call(track.clone())
                            },
                            h4 { class: "font-medium {palette.text_primary()} truncate text-xs sm:text-sm",
                                "{entry.track.name}"
                            }
                            p { class: "{palette.text_secondary()} text-xs sm:text-sm truncate",
                                "{entry.track.artist}"
                            }
                        }
                        button {
                            class: "queue-remove-btn p-1 {palette.press()} rounded-full transition-colors opacity-0 group-hover:opacity-100 group-active:opacity-100",
                            aria_label: "Remove from queue",
                            onclick: {
                                let id = entry.id.clone();
                                move |_| on_remove.call(id.clone())
                            },
                            Icon { name: IconName::Close, class: "w-4 h-4 {palette.text_secondary()}" }
                        }
                    }
                }
            }

            div { class: "flex justify-end mt-3",
                button {
                    class: "queue-clear-btn px-3 py-2 rounded-lg {palette.press()} {palette.text_secondary()} text-xs sm:text-sm flex items-center gap-2 transition-colors",
                    onclick: on_clear_click,
                    Icon { name: IconName::Trash, class: "w-4 h-4" }
                    "Clear queue"
                }
            }
        }
    }
}
