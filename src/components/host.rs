use crate::components::{Icon, IconName, PlaybackView, SongRow, TrendingItem};
use crate::config::{Palette, Theme};
use crate::models::{QueueEntryId, Track};
use crate::playback::{PlayQueue, VolumeLevel};
use dioxus::prelude::*;

const DEMO_CATALOG: &str = include_str!("../../assets/demo_tracks.json");
/// No audio engine here, so every track reports the same length.
const DEMO_TRACK_SECONDS: f64 = 213.0;
const RESTART_THRESHOLD_SECONDS: f64 = 3.0;

pub fn load_catalog(raw: &str) -> Vec<Track> {
    match serde_json::from_str::<Vec<Track>>(raw) {
        Ok(tracks) => tracks,
        Err(err) => {
            tracing::warn!("demo catalogue could not be parsed: {err}");
            Vec::new()
        }
    }
}

fn neighbour(library: &[Track], current: Option<&Track>, forward: bool) -> Option<Track> {
    if library.is_empty() {
        return None;
    }
    let Some(current) = current else {
        return library.first().cloned();
    };
    let idx = library.iter().position(|t| t.id == current.id)?;
    let next = if forward {
        (idx + 1) % library.len()
    } else {
        idx.checked_sub(1).unwrap_or(library.len() - 1)
    };
    library.get(next).cloned()
}

/// Owns the playback and queue state the surfaces render, and applies every
/// notification they send back.
#[component]
pub fn DemoHost() -> Element {
    let mut library = use_signal(|| load_catalog(DEMO_CATALOG));
    let mut now_playing = use_signal(|| None::<Track>);
    let mut queue = use_signal(PlayQueue::new);
    let mut is_playing = use_signal(|| false);
    let mut position = use_signal(|| 0.0f64);
    let mut is_seeking = use_signal(|| false);
    let mut volume = use_signal(|| VolumeLevel::default().get());
    let mut expanded = use_signal(|| false);
    let mut theme = use_signal(|| Theme::Dark);

    use_context_provider(|| theme);
    let palette = Palette::new(theme());

    let mut play = move |track: Track| {
        tracing::debug!(track = %track.id, "play");
        now_playing.set(Some(track));
        position.set(0.0);
        is_playing.set(true);
    };

    let on_next = move |_: ()| {
        let queued = queue.write().pop_front();
        let upcoming = match queued {
            Some(entry) => Some(entry.track),
            None => {
                let current = now_playing.peek().clone();
                neighbour(&library.peek(), current.as_ref(), true)
            }
        };
        if let Some(track) = upcoming {
            play(track);
        }
    };

    let on_previous = move |_: ()| {
        if *position.peek() > RESTART_THRESHOLD_SECONDS {
            position.set(0.0);
            return;
        }
        let current = now_playing.peek().clone();
        let previous = neighbour(&library.peek(), current.as_ref(), false);
        if let Some(track) = previous {
            play(track);
        }
    };

    let mut toggle_like = move |track_id: String| {
        let updated = library.with_mut(|tracks| {
            let track = tracks.iter_mut().find(|t| t.id == track_id)?;
            *track = track.with_like_toggled();
            Some(track.clone())
        });
        let Some(updated) = updated else {
            return;
        };
        queue.write().refresh_track(&updated);
        now_playing.with_mut(|current| {
            if let Some(current) = current.as_mut().filter(|t| t.id == updated.id) {
                *current = updated.clone();
            }
        });
    };

    let add_to_queue = move |track: Track| {
        let id = queue.write().push(track);
        tracing::debug!(entry = %id, "queued");
    };

    let on_remove_from_queue = move |id: QueueEntryId| {
        if queue.write().remove(&id).is_none() {
            tracing::debug!(entry = %id, "remove ignored, entry not queued");
        }
    };

    let on_add_to_playlist = move |track: Track| {
        tracing::info!(track = %track.id, "add to playlist requested");
    };

    let tracks = library();
    let liked: Vec<Track> = tracks.iter().filter(|t| t.is_liked).cloned().collect();
    let current = now_playing();

    rsx! {
        div { class: "min-h-screen pb-28 px-4 pt-6 space-y-8",
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold {palette.text_primary()}", "Playdeck" }
                button {
                    class: "px-3 py-1.5 rounded-full text-xs {palette.chip()}",
                    onclick: move |_| {
                        let next = match theme() {
                            Theme::Dark => Theme::Light,
                            Theme::Light => Theme::Dark,
                        };
                        theme.set(next);
                    },
                    if theme() == Theme::Dark { "Light mode" } else { "Dark mode" }
                }
            }
            section {
                h2 { class: "text-lg font-semibold mb-3 {palette.text_primary()}", "Trending" }
                div { class: "trending-rail flex gap-4 overflow-x-auto pb-2",
                    for track in tracks.iter().cloned() {
                        TrendingItem {
                            key: "{track.id}",
                            track,
                            on_play: move |t| play(t),
                            on_add_to_queue: add_to_queue,
                        }
                    }
                }
            }

            section { class: "space-y-2",
                h2 { class: "text-lg font-semibold mb-3 {palette.text_primary()}", "All Songs" }
                for track in tracks.iter().cloned() {
                    SongRow {
                        key: "{track.id}",
                        track,
                        on_play: move |t| play(t),
                        on_add_to_playlist,
                        on_add_to_queue: add_to_queue,
                    }
                }
            }

            if !liked.is_empty() {
                section { class: "space-y-2",
                    h2 { class: "text-lg font-semibold mb-3 {palette.text_primary()}", "Liked Songs" }
                    for track in liked {
                        SongRow {
                            key: "liked-{track.id}",
                            track: track.clone(),
                            on_play: move |t| play(t),
                            on_remove: {
                                let id = track.id.clone();
                                move |_| toggle_like(id.clone())
                            },
                            on_add_to_queue: add_to_queue,
                        }
                    }
                }
            }
        }

        if let Some(track) = current.clone() {
            if expanded() {
                PlaybackView {
                    track: track.clone(),
                    is_playing: is_playing(),
                    current_time: position(),
                    duration: DEMO_TRACK_SECONDS,
                    volume: volume(),
                    is_seeking: is_seeking(),
                    queue: queue().entries().to_vec(),
                    on_toggle_play: move |_| is_playing.set(!is_playing()),
                    on_minimize: move |_| expanded.set(false),
                    on_previous,
                    on_next,
                    on_toggle_like: {
                        let id = track.id.clone();
                        move |_| toggle_like(id.clone())
                    },
                    on_add_to_playlist: {
                        let track = track.clone();
                        move |_| on_add_to_playlist(track.clone())
                    },
                    on_seek: move |time| position.set(time),
                    on_seeking: move |flag| is_seeking.set(flag),
                    on_volume: move |level| volume.set(level),
                    on_remove_from_queue,
                    on_play_track: move |t| play(t),
                    on_clear_queue: move |_| {
                        let removed = queue.write().clear();
                        tracing::debug!(removed, "queue cleared");
                    },
                }
            } else {
                div {
                    class: "fixed bottom-0 left-0 right-0 bg-gray-900/95 border-t border-gray-800 px-4 py-3 flex items-center gap-3 cursor-pointer",
                    onclick: move |_| expanded.set(true),
                    Icon { name: IconName::Music, class: "w-5 h-5 text-purple-400" }
                    div { class: "min-w-0 flex-1",
                        p { class: "text-sm font-medium text-white truncate", "{track.name}" }
                        p { class: "text-xs text-gray-400 truncate", "{track.artist}" }
                    }
                    if !queue.read().is_empty() {
                        span { class: "text-xs text-gray-500", "{queue.read().len()} queued" }
                    }
                }
            }
        }
    }
}
