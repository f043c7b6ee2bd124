use dioxus::prelude::*;
use iq_core::model::{Shape, training_level};

use super::InstructionPanel;
use crate::views::PuzzleGrid;

/// Free practice on the training puzzle. The answer never leaves this screen.
#[component]
pub fn Instruction2(when_advance: EventHandler<()>) -> Element {
    let level = use_signal(training_level);
    let mut answer = use_signal(Shape::empty);

    rsx! {
        InstructionPanel { when_advance,
            p {
                "Below is a training example. In each row the third shape combines "
                "the filled cells of the first two."
            }
            p { "Form the missing shape by pressing the buttons below the grid. Try to solve it!" }
            PuzzleGrid {
                level: level(),
                answer: answer(),
                set_answer: move |shape: Shape| answer.set(shape),
            }
            div { class: "instruction-caution",
                p { "Try clicking every button more than once!" }
                p { "This is your only chance to practice. Advance only when you are ready!" }
            }
        }
    }
}
