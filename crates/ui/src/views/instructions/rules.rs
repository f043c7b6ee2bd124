use dioxus::prelude::*;

use super::InstructionPanel;

#[component]
pub fn Instruction1(when_advance: EventHandler<()>) -> Element {
    rsx! {
        InstructionPanel { when_advance,
            ol { class: "instruction-rules",
                li { "This is an IQ engine." }
                li {
                    "Just like a normal IQ test, a 3x3 grid will be shown to you "
                    "with the last item missing."
                }
                li { "Your task is to find the pattern and discover the shape of the missing item." }
            }
            p { "Advance to see an example." }
        }
    }
}
