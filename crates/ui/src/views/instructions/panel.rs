use dioxus::prelude::*;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const DEFAULT_BUTTON_TEXT: &str = "Advance";

/// Heading, arbitrary content and a single button that moves the flow on.
#[component]
pub fn InstructionPanel(
    children: Element,
    when_advance: EventHandler<()>,
    #[props(default = DEFAULT_BUTTON_TEXT.to_string())] button_text: String,
    #[props(default)] disabled: bool,
) -> Element {
    let advance = use_callback(move |()| {
        if !disabled {
            when_advance.call(());
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<PanelTestHandles>() {
            handles.register(advance);
        }
    }

    rsx! {
        section { class: "instruction-panel",
            h2 { class: "view-title", "Instructions" }
            div { class: "instruction-content", {children} }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled,
                onclick: move |_| advance.call(()),
                "{button_text}"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PanelTestHandles {
    advance: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl PanelTestHandles {
    pub(crate) fn register(&self, advance: Callback<()>) {
        *self.advance.borrow_mut() = Some(advance);
    }

    pub(crate) fn advance(&self) -> Callback<()> {
        (*self.advance.borrow()).expect("panel advance registered")
    }
}
