use std::sync::Arc;
use loomscript_core::{Instruction, Script};

/// Playback cursor over one parsed script.
#[derive(Debug, Clone)]
pub struct Frame {
    pub script: Arc<Script>,
    pub pc: usize,
}

impl Frame {
    pub fn new(script: impl Into<Arc<Script>>, pc: usize) -> Self {
        Self { script: script.into(), pc }
    }

    pub fn current(&self) -> Option<&Instruction> {
        self.script.get(self.pc)
    }

    pub fn has_next(&self) -> bool {
        self.pc + 1 < self.script.len()
    }

    pub fn advance(&mut self) {
        self.pc += 1;
    }
}
