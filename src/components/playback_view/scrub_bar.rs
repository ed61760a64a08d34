use crate::config::Palette;
use crate::playback::{GestureEnd, ScrubGesture, VolumeLevel};
use crate::components::{Icon, IconName};
use crate::utils::{format_time, progress_percent};
use dioxus::prelude::*;

/// Position slider with elapsed/total labels.
///
/// The pending drag value stays local until release; live clock updates
/// that arrive meanwhile are not shown.
#[component]
pub(super) fn ScrubBar(
    current_time: f64,
    duration: f64,
    is_seeking: bool,
    palette: Palette,
    on_seek: EventHandler<f64>,
    on_seeking: EventHandler<bool>,
) -> Element {
    let mut gesture = use_signal(ScrubGesture::default);

    let shown = gesture().display(current_time);
    let dragging = is_seeking || gesture().is_seeking();
    let max = if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    };
    let slider_value = if shown.is_finite() {
        shown.clamp(0.0, max)
    } else {
        0.0
    };
    let fill = progress_percent(shown, duration);

    let on_input = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<f64>() {
            let mut state = *gesture.peek();
            state.drag(value, duration, |flag| on_seeking.call(flag));
            gesture.set(state);
        }
    };

    let mut release = move |end: GestureEnd| {
        let mut state = *gesture.peek();
        let result = state.finish(end, |time| on_seek.call(time), |flag| on_seeking.call(flag));
        gesture.set(state);
        if let Err(err) = result {
            tracing::warn!("{err}");
        }
    };

    // Keyboard edits only end with `change`. After a pointer release nothing is pending.
    let on_change = move |_: Event<FormData>| {
        let mut state = *gesture.peek();
        let committed = state.settle(|time| on_seek.call(time), |flag| on_seeking.call(flag));
        gesture.set(state);
        if committed {
            tracing::debug!("scrub value committed on change");
        }
    };

    let mut interrupt = move || {
        let mut state = *gesture.peek();
        state.interrupt(|flag| on_seeking.call(flag));
        gesture.set(state);
        tracing::debug!("scrub gesture interrupted, seek discarded");
    };

    rsx! {
        div { class: "mb-6 sm:mb-8 px-2",
            div { class: "flex items-center justify-between text-xs sm:text-sm font-mono mb-3",
                span { class: "elapsed {palette.text_secondary()}", "{format_time(shown)}" }
                span { class: "total {palette.text_secondary()}", "{format_time(duration)}" }
            }
            input {
                r#type: "range",
                min: "0",
                max: "{max}",
                step: "0.1",
                value: "{slider_value}",
                class: if dragging { "scrub-bar seeking w-full h-2 appearance-none rounded-full cursor-pointer" } else { "scrub-bar w-full h-2 appearance-none rounded-full cursor-pointer" },
                style: "accent-color: #a855f7; background: linear-gradient(to right, #a855f7 {fill}%, #d1d5db {fill}%);",
                oninput: on_input,
                onchange: on_change,
                onmouseup: move |_| release(GestureEnd::MouseUp),
                ontouchend: move |e: TouchEvent| {
                    // Suppress the emulated mouseup that follows a touch.
                    e.prevent_default();
                    release(GestureEnd::TouchEnd);
                },
                ontouchcancel: move |_| interrupt(),
                onpointercancel: move |_| interrupt(),
            }
        }
    }
}

/// Volume slider. Every change is clamped and forwarded immediately.
#[component]
pub(super) fn VolumeControl(volume: f64, palette: Palette, on_volume: EventHandler<f64>) -> Element {
    let shown = VolumeLevel::new(volume).get();

    rsx! {
        div { class: "flex items-center space-x-2 sm:space-x-3 flex-1 max-w-28 sm:max-w-32",
            Icon { name: IconName::Volume, class: "w-4 h-4 {palette.text_secondary()}" }
            input {
                r#type: "range",
                min: "0",
                max: "1",
                step: "0.01",
                value: "{shown}",
                class: "volume-slider w-full h-2 {palette.slider_track()} rounded-full appearance-none cursor-pointer",
                style: "accent-color: #a855f7",
                oninput: move |e: Event<FormData>| {
                    if let Some(level) = VolumeLevel::parse(&e.value()) {
                        on_volume.call(level.get());
                    }
                },
            }
        }
    }
}
