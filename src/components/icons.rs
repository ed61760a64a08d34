use dioxus::prelude::*;

/// Glyphs used by the playback surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Play,
    Pause,
    Prev,
    Next,
    Shuffle,
    Repeat,
    Heart,
    HeartFilled,
    Eye,
    More,
    Plus,
    ListPlus,
    Close,
    ChevronDown,
    Volume,
    Share,
    Music,
    Trash,
}

impl IconName {
    /// Solid glyphs are drawn with `fill` instead of a stroke.
    fn is_solid(self) -> bool {
        matches!(
            self,
            IconName::Play | IconName::Pause | IconName::Prev | IconName::Next | IconName::HeartFilled
        )
    }
}

#[component]
pub fn Icon(name: IconName, #[props(into)] class: String) -> Element {
    let (fill, stroke) = if name.is_solid() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    let body = match name {
        IconName::Play => rsx! {
            polygon { points: "5 3 19 12 5 21 5 3" }
        },
        IconName::Pause => rsx! {
            rect { x: "6", y: "4", width: "4", height: "16" }
            rect { x: "14", y: "4", width: "4", height: "16" }
        },
        IconName::Prev => rsx! {
            polygon { points: "19 20 9 12 19 4 19 20" }
            rect { x: "4", y: "5", width: "2", height: "14" }
        },
        IconName::Next => rsx! {
            polygon { points: "5 4 15 12 5 20 5 4" }
            rect { x: "18", y: "5", width: "2", height: "14" }
        },
        IconName::Shuffle => rsx! {
            polyline { points: "16 3 21 3 21 8" }
            path { d: "M4 20 21 3" }
            polyline { points: "21 16 21 21 16 21" }
            path { d: "M15 15l6 6" }
            path { d: "M4 4l5 5" }
        },
        IconName::Repeat => rsx! {
            polyline { points: "17 1 21 5 17 9" }
            path { d: "M3 11V9a4 4 0 0 1 4-4h14" }
            polyline { points: "7 23 3 19 7 15" }
            path { d: "M21 13v2a4 4 0 0 1-4 4H3" }
        },
        IconName::Heart | IconName::HeartFilled => rsx! {
            path { d: "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z" }
        },
        IconName::Eye => rsx! {
            path { d: "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z" }
            circle { cx: "12", cy: "12", r: "3" }
        },
        IconName::More => rsx! {
            circle { cx: "12", cy: "12", r: "1" }
            circle { cx: "19", cy: "12", r: "1" }
            circle { cx: "5", cy: "12", r: "1" }
        },
        IconName::Plus => rsx! {
            path { d: "M12 5v14" }
            path { d: "M5 12h14" }
        },
        IconName::ListPlus => rsx! {
            path { d: "M11 12H3" }
            path { d: "M16 6H3" }
            path { d: "M16 18H3" }
            path { d: "M18 9v6" }
            path { d: "M21 12h-6" }
        },
        IconName::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "M6 6l12 12" }
        },
        IconName::ChevronDown => rsx! {
            polyline { points: "6 9 12 15 18 9" }
        },
        IconName::Volume => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        },
        IconName::Share => rsx! {
            circle { cx: "18", cy: "5", r: "3" }
            circle { cx: "6", cy: "12", r: "3" }
            circle { cx: "18", cy: "19", r: "3" }
            path { d: "M8.59 13.51l6.83 3.98" }
            path { d: "M15.41 6.51l-6.82 3.98" }
        },
        IconName::Music => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        IconName::Trash => rsx! {
            polyline { points: "3 6 5 6 21 6" }
            path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill,
            stroke,
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {body}
        }
    }
}
