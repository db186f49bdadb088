//! 8x8 grid rendering and raw gesture wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BoardGrid` is presentation only. It orders cells for the viewer's
//! perspective, paints destination overlays and the click-origin ring, and
//! forwards DOM gestures as `Square`s. The selection state machine lives with
//! the caller.

#[cfg(test)]
#[path = "board_grid_test.rs"]
mod board_grid_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::game::board::{Board, GridCell, Highlight};
use crate::game::piece::PieceColor;
use crate::game::square::Square;
use crate::util::drag_image::set_opaque_drag_image;

/// Board squares in display order, with gesture callbacks.
#[component]
pub fn BoardGrid(
    #[prop(into)] board: Signal<Board>,
    #[prop(into)] perspective: Signal<PieceColor>,
    #[prop(into)] destinations: Signal<HashSet<Square>>,
    #[prop(into)] selected: Signal<Option<Square>>,
    on_square_click: Callback<Square>,
    on_drag_start: Callback<Square>,
    on_drag_end: Callback<()>,
    on_drop: Callback<Square>,
) -> impl IntoView {
    let config = BoardConfig::from_context();

    let rows = move || {
        let rows = board.with(|b| b.display_rows(perspective.get()));
        rows.into_iter()
            .map(|row| {
                let squares = row
                    .into_iter()
                    .map(|cell| {
                        let piece_src = cell
                            .piece
                            .map(|p| p.asset_path(&config.asset_base, &config.asset_extension));
                        let gestures = SquareGestures {
                            on_square_click,
                            on_drag_start,
                            on_drag_end,
                            on_drop,
                        };
                        board_square(cell, piece_src, destinations, selected, gestures)
                    })
                    .collect_view();
                view! { <div class="board-grid__row" role="row">{squares}</div> }
            })
            .collect_view()
    };

    view! { <div class="board-grid" role="grid">{rows}</div> }
}

#[derive(Clone, Copy)]
struct SquareGestures {
    on_square_click: Callback<Square>,
    on_drag_start: Callback<Square>,
    on_drag_end: Callback<()>,
    on_drop: Callback<Square>,
}

fn board_square(
    cell: GridCell,
    piece_src: Option<String>,
    destinations: Signal<HashSet<Square>>,
    selected: Signal<Option<Square>>,
    gestures: SquareGestures,
) -> impl IntoView {
    let square = cell.square;
    let class = move || square_class(&cell, selected.get());
    let overlay = move || {
        let highlight = destinations.with(|d| cell.highlight(d));
        overlay_class(highlight).map(|class| view! { <div class=class></div> })
    };
    let piece_alt = cell.piece.map(|p| p.asset_code()).unwrap_or_default();
    let piece = piece_src.map(|src| {
        view! {
            <img
                class="board-square__piece"
                src=src
                alt=piece_alt
                draggable="true"
                on:dragstart=move |ev: leptos::ev::DragEvent| {
                    set_opaque_drag_image(&ev);
                    gestures.on_drag_start.run(square);
                }
                on:dragend=move |_| gestures.on_drag_end.run(())
            />
        }
    });

    view! {
        <div
            class=class
            role="gridcell"
            data-square=square.to_string()
            on:click=move |_| gestures.on_square_click.run(square)
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                gestures.on_drop.run(square);
            }
        >
            {overlay}
            {piece}
        </div>
    }
}

/// Class list for one square: shade plus the click-origin ring.
#[must_use]
pub fn square_class(cell: &GridCell, selected: Option<Square>) -> String {
    let shade = if cell.is_light() { "board-square--light" } else { "board-square--dark" };
    if selected == Some(cell.square) {
        format!("board-square {shade} board-square--selected")
    } else {
        format!("board-square {shade}")
    }
}

/// Overlay element class for a destination marker, if any.
#[must_use]
pub fn overlay_class(highlight: Highlight) -> Option<&'static str> {
    match highlight {
        Highlight::None => None,
        Highlight::QuietMove => Some("board-square__dot"),
        Highlight::Capture => Some("board-square__ring"),
    }
}
