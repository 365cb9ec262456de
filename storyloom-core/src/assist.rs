//! Seam for the external text-generation service that drafts script snippets.
//!
//! Only the prompt template and the result handling live here. The service
//! client is supplied by the caller.

use anyhow::{bail, Context, Result};
use crate::runtime::Library;

/// Produces a script snippet for `prompt` under `system_instruction`.
pub trait TextGenerator {
    fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String> {
        self(system_instruction, prompt)
    }
}

fn join_names(names: Vec<&str>) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

/// The fixed instruction sent with every request, listing the registered
/// display names.
pub fn system_instruction(library: &Library) -> String {
    let characters = join_names(library.characters.names());
    let scenes = join_names(library.scenes.names());

    format!(
        "You are an assistant for writing visual novel scripts.
Your output MUST follow the specified format. Do not include any explanations.
- To set a background, use: scene SceneName
- To show a character, use: show CharacterName
- To hide a character, use: hide CharacterName
- For character dialogue, use: CharacterName \"Dialogue text goes here.\"
- For narration, use: \"Narration text goes here.\"

Available Characters: {characters}
Available Scenes: {scenes}

Generate a script snippet based on the user's request.
"
    )
}

/// Asks `generator` for a snippet. An empty prompt sends nothing and yields
/// `Ok(None)`. Output starting with `Error:` counts as a failure.
pub fn request_snippet(generator: &dyn TextGenerator, library: &Library, prompt: &str) -> Result<Option<String>> {
    if prompt.trim().is_empty() {
        return Ok(None);
    }
    let instruction = system_instruction(library);
    log::debug!("requesting snippet for prompt ({} chars)", prompt.chars().count());
    let text = generator
        .generate(&instruction, prompt)
        .context("Could not generate story")?;
    if text.starts_with("Error:") {
        bail!("{}", text);
    }
    Ok(Some(text))
}
