//! Opaque drag preview for piece images.
//!
//! Browsers render the default drag image semi-transparent. We clone the
//! dragged `<img>` off screen, hand the clone to `setDragImage` during the
//! `dragstart` call, and remove it on the next scheduler turn. The clone is
//! display-only and never touches board state.

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Replace the drag preview of `ev` with an opaque copy of its target image.
///
/// No-op when the target is not an image or no `DataTransfer` is attached.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn set_opaque_drag_image(ev: &leptos::ev::DragEvent) {
    #[cfg(feature = "hydrate")]
    {
        let Some(source) = ev.target() else {
            return;
        };
        let Ok(source) = source.dyn_into::<web_sys::HtmlImageElement>() else {
            return;
        };
        let Some(data_transfer) = ev.data_transfer() else {
            return;
        };
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let Ok(node) = source.clone_node_with_deep(true) else {
            return;
        };
        let Ok(ghost) = node.dyn_into::<web_sys::HtmlImageElement>() else {
            return;
        };

        let style = ghost.style();
        let styled = style
            .set_property("position", "absolute")
            .and_then(|()| style.set_property("top", "-9999px"))
            .and_then(|()| style.set_property("opacity", "1"));
        if let Err(e) = styled.and_then(|()| body.append_child(&ghost).map(|_| ())) {
            leptos::logging::warn!("drag image setup failed: {e:?}");
            return;
        }

        let offset_x = i32::try_from(source.width() / 2).unwrap_or(0);
        let offset_y = i32::try_from(source.height() / 2).unwrap_or(0);
        data_transfer.set_drag_image(&ghost, offset_x, offset_y);

        // The browser snapshots the image synchronously; release it next turn.
        Timeout::new(0, move || ghost.remove()).forget();
    }
}
