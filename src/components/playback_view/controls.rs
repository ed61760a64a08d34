use crate::components::{Icon, IconName};
use crate::config::Palette;
use dioxus::prelude::*;

/// Top bar: minimise, "playing from" label and the overflow menu.
#[component]
pub(super) fn PlaybackHeader(
    playing_from: String,
    palette: Palette,
    on_minimize: EventHandler<()>,
    on_add_to_playlist: EventHandler<()>,
    on_share: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "flex items-center justify-between p-4 pt-8 sm:pt-12 flex-shrink-0",
            button {
                id: "minimize-btn",
                r#type: "button",
                class: "p-3 {palette.icon_press()} rounded-full transition-colors",
                onclick: move |_| on_minimize.call(()),
                Icon { name: IconName::ChevronDown, class: "w-6 h-6 {palette.text_primary()}" }
            }
            div { class: "text-center flex-1",
                p { class: "{palette.text_secondary()} text-xs sm:text-sm", "Playing from" }
                p { class: "{palette.text_primary()} font-medium text-sm sm:text-base", "{playing_from}" }
            }
            OverflowMenu { palette, on_add_to_playlist, on_share }
        }
    }
}

/// "More" button with the add-to-playlist / share menu.
#[component]
fn OverflowMenu(
    palette: Palette,
    on_add_to_playlist: EventHandler<()>,
    on_share: Option<EventHandler<()>>,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "relative",
            button {
                id: "menu-btn",
                r#type: "button",
                class: "p-3 {palette.icon_press()} rounded-full transition-colors",
                onclick: move |_| open.set(!open()),
                Icon { name: IconName::More, class: "w-6 h-6 {palette.text_primary()}" }
            }
            if open() {
                // Backdrop: any selection outside the menu closes it.
                div {
                    class: "fixed inset-0 z-0",
                    onclick: move |_| open.set(false),
                }
                div { class: "overflow-menu absolute right-0 top-14 {palette.menu()} border rounded-lg shadow-lg py-2 w-48 z-10",
                    button {
                        class: "w-full text-left px-4 py-3 {palette.menu_item()} flex items-center transition-colors min-h-[44px]",
                        onclick: move |_| {
                            on_add_to_playlist.call(());
                            open.set(false);
                        },
                        Icon { name: IconName::Plus, class: "w-4 h-4 mr-3" }
                        "Add to Playlist"
                    }
                    button {
                        class: "w-full text-left px-4 py-3 {palette.menu_item()} flex items-center transition-colors min-h-[44px]",
                        onclick: move |_| {
                            if let Some(on_share) = on_share {
                                on_share.call(());
                            }
                            open.set(false);
                        },
                        Icon { name: IconName::Share, class: "w-4 h-4 mr-3" }
                        "Share"
                    }
                }
            }
        }
    }
}

/// Shuffle, previous, play/pause, next, repeat. No guards: the owner decides
/// what a press means while a transition is in flight.
#[component]
pub(super) fn TransportButtons(
    is_playing: bool,
    palette: Palette,
    on_previous: EventHandler<()>,
    on_toggle_play: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "mb-6 sm:mb-8",
            div { class: "flex items-center justify-center space-x-4 sm:space-x-6",
                // Shuffle and repeat are placeholders.
                button {
                    id: "shuffle-btn",
                    r#type: "button",
                    class: "p-2 {palette.icon_press()} rounded-full transition-colors",
                    Icon { name: IconName::Shuffle, class: "w-5 h-5 {palette.text_secondary()}" }
                }
                button {
                    id: "prev-btn",
                    r#type: "button",
                    class: "p-3 {palette.icon_press()} rounded-full transition-colors",
                    onclick: move |_| on_previous.call(()),
                    Icon { name: IconName::Prev, class: "w-6 h-6 {palette.text_primary()}" }
                }
                button {
                    id: "play-pause-btn",
                    r#type: "button",
                    class: "p-4 bg-purple-500 active:bg-purple-700 rounded-full transition-colors shadow-lg",
                    onclick: move |_| on_toggle_play.call(()),
                    if is_playing {
                        Icon { name: IconName::Pause, class: "w-7 h-7 text-white" }
                    } else {
                        Icon { name: IconName::Play, class: "w-7 h-7 text-white ml-0.5" }
                    }
                }
                button {
                    id: "next-btn",
                    r#type: "button",
                    class: "p-3 {palette.icon_press()} rounded-full transition-colors",
                    onclick: move |_| on_next.call(()),
                    Icon { name: IconName::Next, class: "w-6 h-6 {palette.text_primary()}" }
                }
                button {
                    id: "repeat-btn",
                    r#type: "button",
                    class: "p-2 {palette.icon_press()} rounded-full transition-colors",
                    Icon { name: IconName::Repeat, class: "w-5 h-5 {palette.text_secondary()}" }
                }
            }
        }
    }
}

#[component]
pub(super) fn LikeButton(liked: bool, palette: Palette, on_toggle_like: EventHandler<()>) -> Element {
    let (button_class, content_class) = if liked {
        ("bg-red-500 active:bg-red-700", "text-white")
    } else {
        (palette.chip(), "")
    };

    rsx! {
        button {
            id: "like-btn",
            r#type: "button",
            class: "flex items-center space-x-2 px-4 py-3 {button_class} rounded-full transition-colors min-h-[44px]",
            onclick: move |_| on_toggle_like.call(()),
            Icon {
                name: if liked { IconName::HeartFilled } else { IconName::Heart },
                class: "w-4 h-4 {content_class}",
            }
            span { class: "text-xs sm:text-sm font-medium {content_class}",
                if liked {
                    "Liked"
                } else {
                    "Like"
                }
            }
        }
    }
}
