use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};
use web_sys::HtmlElement;

use crate::parallax::{next_progress, EntranceFlag, SectionGeometry};

fn viewport_height() -> Option<f64> {
    window().inner_height().ok()?.as_f64()
}

fn measure(el: &HtmlElement) -> Option<SectionGeometry> {
    Some(SectionGeometry {
        top: el.get_bounding_client_rect().top(),
        height: el.offset_height() as f64,
        viewport_height: viewport_height()?,
    })
}

/// Window scroll offset, frozen once `section` has scrolled fully out of view.
pub fn use_hero_scroll(section: NodeRef<html::Section>) -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            let Some(el) = section.get_untracked() else {
                return;
            };
            if el.get_bounding_client_rect().bottom() <= 0.0 {
                return;
            }
            if let Ok(y) = window().scroll_y() {
                set_scroll_y.set(y.max(0.0));
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    scroll_y
}

/// Progress of `section` through the viewport in `[0, 1]`.
///
/// Computed once when the section mounts and again on every scroll event.
/// Missing or degenerate geometry keeps the previous value.
pub fn use_section_progress(section: NodeRef<html::Section>) -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0_f64);

    let update = move |el: &HtmlElement| {
        let geometry = measure(el);
        if geometry.is_none() {
            log::debug!("skipping section progress update: viewport height unavailable");
        }
        let prev = progress.get_untracked();
        let next = next_progress(prev, geometry.as_ref());
        if next != prev {
            set_progress.set(next);
        }
    };

    Effect::new(move |_| {
        if let Some(el) = section.get() {
            update(&el);
        }
    });

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            if let Some(el) = section.get_untracked() {
                update(&el);
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    progress
}

/// Flips to `true` once, `delay` after the calling component mounts.
pub fn use_entrance_flag(delay: std::time::Duration) -> Signal<bool> {
    let (flag, set_flag) = signal(EntranceFlag::new());

    Effect::new(move |_| {
        // the timer only fires once `delay` has elapsed
        let fire = move || {
            set_flag.update(|f| {
                f.poll(delay, delay);
            })
        };
        match set_timeout_with_handle(fire, delay) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::warn!("couldn't schedule entrance animation: {e:?}");
                set_flag.update(|f| {
                    f.enter();
                });
            }
        }
    });

    Signal::derive(move || flag.get().is_entered())
}
