use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Colour scheme requested by the host. Components only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Theme from context, dark when the host provides none.
pub fn use_theme() -> Theme {
    let reactive = try_use_context::<Signal<Theme>>();
    let fixed = try_use_context::<Theme>();
    reactive.map(|theme| theme()).or(fixed).unwrap_or_default()
}

/// Tailwind class sets per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(Theme);

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Self(theme)
    }

    fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self.0 {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    pub fn text_primary(self) -> &'static str {
        self.pick("text-white", "text-gray-900")
    }

    pub fn text_secondary(self) -> &'static str {
        self.pick("text-gray-400", "text-gray-600")
    }

    pub fn text_muted(self) -> &'static str {
        self.pick("text-gray-500", "text-gray-400")
    }

    pub fn card(self) -> &'static str {
        self.pick(
            "bg-gray-800/50 active:bg-gray-800",
            "bg-white/50 active:bg-white border border-gray-200",
        )
    }

    pub fn queue_row(self) -> &'static str {
        self.pick(
            "bg-gray-800/50 active:bg-gray-800",
            "bg-gray-100/50 active:bg-gray-100",
        )
    }

    pub fn press(self) -> &'static str {
        self.pick("active:bg-gray-700", "active:bg-gray-200")
    }

    pub fn icon_press(self) -> &'static str {
        self.pick("active:bg-gray-800", "active:bg-gray-200")
    }

    pub fn menu(self) -> &'static str {
        self.pick("bg-gray-800 border-gray-700", "bg-white border-gray-200")
    }

    pub fn menu_item(self) -> &'static str {
        self.pick(
            "active:bg-gray-700 text-white",
            "active:bg-gray-100 text-gray-900",
        )
    }

    pub fn chip(self) -> &'static str {
        self.pick("bg-gray-700 text-gray-300", "bg-gray-200 text-gray-600")
    }

    pub fn surface(self) -> &'static str {
        self.pick(
            "bg-gradient-to-b from-gray-900 via-gray-900 to-black",
            "bg-gradient-to-b from-gray-50 via-gray-100 to-gray-200",
        )
    }

    pub fn slider_track(self) -> &'static str {
        self.pick("bg-gray-600", "bg-gray-300")
    }

    /// Like indicator: filled red when liked, neutral otherwise.
    pub fn like_indicator(self, liked: bool) -> &'static str {
        if liked {
            "text-red-500 fill-red-500"
        } else {
            self.text_secondary()
        }
    }
}
