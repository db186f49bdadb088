//! Live viewport breakpoint observation.
//!
//! Samples a `MediaQueryList` synchronously and then forwards every `change`
//! event until the returned guard is dropped. Requires a browser
//! environment; SSR and host builds install nothing and keep the wide
//! layout.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "media_query_test.rs"]
mod media_query_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::state::viewport::{LayoutState, narrow_query};

/// Installed `change` listener. Dropping it removes the listener.
pub struct MediaQueryWatch {
    #[cfg(feature = "hydrate")]
    list: web_sys::MediaQueryList,
    #[cfg(feature = "hydrate")]
    listener: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl Drop for MediaQueryWatch {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = self
                .list
                .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref())
            {
                leptos::logging::warn!("failed to remove media listener: {e:?}");
            }
        }
    }
}

/// Observe the narrow-viewport condition for `breakpoint_px`.
///
/// `on_change` runs once immediately with the current layout, then on every
/// change. Returns the guard owning the listener, or `None` when no live
/// media list is available (in which case only the initial sample, if any,
/// is delivered).
pub fn observe_layout(breakpoint_px: u32, on_change: impl Fn(LayoutState) + 'static) -> Option<MediaQueryWatch> {
    let query = narrow_query(breakpoint_px);
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let list = match window.match_media(&query) {
            Ok(Some(list)) => list,
            _ => {
                // No live media list; fall back to one width sample.
                if let Ok(width) = window.inner_width()
                    && let Some(width) = width.as_f64()
                {
                    on_change(LayoutState::for_width(width, breakpoint_px));
                }
                return None;
            }
        };

        on_change(LayoutState { narrow: list.matches() });

        let listener = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(LayoutState { narrow: ev.matches() });
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        if let Err(e) = list.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
            leptos::logging::warn!("failed to watch {query}: {e:?}");
            return None;
        }
        Some(MediaQueryWatch { list, listener })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop((query, on_change));
        None
    }
}
