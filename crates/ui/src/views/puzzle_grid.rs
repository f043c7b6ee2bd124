use dioxus::prelude::*;
use iq_core::model::{Level, Shape};

use crate::vm::{TileVm, map_puzzle_grid};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The 3x3 puzzle matrix plus an answer pad for building the missing shape.
#[component]
pub fn PuzzleGrid(level: Level, answer: Shape, set_answer: EventHandler<Shape>) -> Element {
    let vm = map_puzzle_grid(&level, answer);
    let toggle = use_callback(move |cell: usize| {
        if let Ok(next) = answer.toggled(cell) {
            set_answer.call(next);
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<GridTestHandles>() {
            handles.register(toggle);
        }
    }

    let tiles = vm.tiles.iter().map(|tile| rsx! { PuzzleTile { tile: tile.clone() } });
    let pad = vm.pad.iter().enumerate().map(|(cell, filled)| {
        rsx! {
            button {
                class: if *filled { "answer-cell answer-cell--on" } else { "answer-cell" },
                r#type: "button",
                aria_label: "Answer cell {cell}",
                onclick: move |_| toggle.call(cell),
            }
        }
    });

    rsx! {
        div { class: "puzzle",
            div { class: "puzzle-matrix", {tiles} }
            div { class: "answer-pad", {pad} }
            if vm.solved {
                p { class: "puzzle-status", "Correct!" }
            }
        }
    }
}

#[component]
fn PuzzleTile(tile: TileVm) -> Element {
    let cells = tile.cells.iter().map(|filled| {
        rsx! {
            span { class: if *filled { "tile-cell tile-cell--on" } else { "tile-cell" } }
        }
    });
    rsx! {
        div { class: if tile.is_slot { "puzzle-tile puzzle-tile--slot" } else { "puzzle-tile" },
            {cells}
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GridTestHandles {
    toggle: Rc<RefCell<Option<Callback<usize>>>>,
}

#[cfg(test)]
impl GridTestHandles {
    pub(crate) fn register(&self, toggle: Callback<usize>) {
        *self.toggle.borrow_mut() = Some(toggle);
    }

    pub(crate) fn toggle(&self) -> Callback<usize> {
        (*self.toggle.borrow()).expect("grid toggle registered")
    }
}
