use serde::{Deserialize, Serialize};
use crate::runtime::assets::{Character, Scene};

/// A character currently on stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub character: Character,
    pub position: String,
}

/// The line occupying the dialogue box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Display name, the raw id for unknown characters, `None` for narration.
    pub speaker: Option<String>,
    pub text: String,
    /// Index of the instruction that produced the line.
    pub source: usize,
}

/// What the renderer paints at one cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationState {
    pub background: Option<Scene>,
    pub visible: Vec<Sprite>,
    pub dialogue: Option<DialogueLine>,
}

impl PresentationState {
    pub fn is_visible(&self, character_id: &str) -> bool {
        self.visible.iter().any(|s| s.character.id == character_id)
    }

    pub fn sprite(&self, character_id: &str) -> Option<&Sprite> {
        self.visible.iter().find(|s| s.character.id == character_id)
    }

    /// Visible ids, sorted. Stage order carries no meaning.
    pub fn visible_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.visible.iter().map(|s| s.character.id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn background_id(&self) -> Option<&str> {
        self.background.as_ref().map(|s| s.id.as_str())
    }

    pub fn speaker(&self) -> Option<&str> {
        self.dialogue.as_ref().and_then(|d| d.speaker.as_deref())
    }

    pub fn text(&self) -> Option<&str> {
        self.dialogue.as_ref().map(|d| d.text.as_str())
    }
}
