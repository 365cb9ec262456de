use loomscript_core::Instruction;
use crate::runtime::{DialogueLine, Library, PresentationState, Sprite};

/// Applies one instruction on top of `state`. Unknown ids never fail: a
/// missing scene clears the background, a missing character is not shown,
/// and a missing speaker is displayed by its raw id.
pub fn walk_instruction(state: &mut PresentationState, library: &Library, index: usize, ins: &Instruction) {
    log::trace!("walk_instruction #{}: {:?}", index, ins);
    match ins {
        Instruction::Scene { scene_id } => {
            state.background = library.scene(scene_id).cloned();
            if state.background.is_none() {
                log::trace!("scene '{}' is not registered", scene_id);
            }
        }
        Instruction::Show { character_id, position } => {
            let Some(character) = library.character(character_id) else {
                log::trace!("character '{}' is not registered", character_id);
                return;
            };
            let sprite = Sprite { character: character.clone(), position: position.clone() };
            match state.visible.iter_mut().find(|s| s.character.id == *character_id) {
                Some(old) => *old = sprite,
                None => state.visible.push(sprite),
            }
        }
        Instruction::Hide { character_id } => {
            state.visible.retain(|s| s.character.id != *character_id);
        }
        Instruction::Dialogue { character_id, text } => {
            let speaker = character_id.as_ref().map(|id| {
                library
                    .character(id)
                    .map(|c| c.name.as_str())
                    .filter(|name| !name.is_empty())
                    .unwrap_or(id.as_str())
                    .to_string()
            });
            state.dialogue = Some(DialogueLine { speaker, text: text.clone(), source: index });
        }
    }
}
