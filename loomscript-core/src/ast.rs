//! Instruction set of the line-oriented story script.
//!
//! A parsed [`Script`] is an ordered, immutable list of [`Instruction`]s. It is
//! produced once per parse and replaced wholesale when the source changes.

use std::ops::Index;
use std::slice::Iter;

/// Stage position used when a `show` line does not name one.
pub const DEFAULT_POSITION: &str = "center";

/// The root node of every parsed script.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Script {
    pub body: Vec<Instruction>,
}

impl Script {
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.body.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Instruction> {
        self.body.iter()
    }

    /// Number of instructions that put a line into the dialogue box.
    pub fn dialogue_count(&self) -> usize {
        self.body.iter().filter(|i| i.is_dialogue()).count()
    }
}

impl Index<usize> for Script {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Instruction {
        &self.body[index]
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Instruction;
    type IntoIter = Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}

/// A single script instruction.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Instruction {
    /// Replaces the active background.
    Scene {
        scene_id: String,
    },
    /// Puts a character sprite on stage.
    Show {
        character_id: String,
        position: String,
    },
    /// Removes a character sprite from the stage.
    Hide {
        character_id: String,
    },
    /// A spoken line, or narration when `character_id` is `None`.
    Dialogue {
        character_id: Option<String>,
        text: String,
    },
}

impl Instruction {
    pub fn scene(scene_id: impl Into<String>) -> Self {
        Instruction::Scene { scene_id: scene_id.into() }
    }

    pub fn show(character_id: impl Into<String>, position: impl Into<String>) -> Self {
        Instruction::Show { character_id: character_id.into(), position: position.into() }
    }

    pub fn hide(character_id: impl Into<String>) -> Self {
        Instruction::Hide { character_id: character_id.into() }
    }

    pub fn say(character_id: impl Into<String>, text: impl Into<String>) -> Self {
        Instruction::Dialogue { character_id: Some(character_id.into()), text: text.into() }
    }

    pub fn narrate(text: impl Into<String>) -> Self {
        Instruction::Dialogue { character_id: None, text: text.into() }
    }

    pub fn is_dialogue(&self) -> bool {
        matches!(self, Instruction::Dialogue { .. })
    }

    /// Keyword the instruction was written with, for logs and debug output.
    pub fn kind(&self) -> &'static str {
        match self {
            Instruction::Scene { .. } => "scene",
            Instruction::Show { .. } => "show",
            Instruction::Hide { .. } => "hide",
            Instruction::Dialogue { character_id: Some(_), .. } => "dialogue",
            Instruction::Dialogue { character_id: None, .. } => "narration",
        }
    }
}
