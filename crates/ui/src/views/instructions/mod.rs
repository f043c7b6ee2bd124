mod briefing;
mod panel;
mod practice;
mod rules;

pub use briefing::Instruction3;
pub use panel::InstructionPanel;
pub use practice::Instruction2;
pub use rules::Instruction1;

#[cfg(test)]
pub(crate) use panel::PanelTestHandles;
