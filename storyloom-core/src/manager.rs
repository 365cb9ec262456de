use std::path::Path;
use std::sync::Arc;
use anyhow::{Context, Result};
use log::info;

use loomscript_core::{Parser, Script};
use crate::assist::{self, TextGenerator};
use crate::config::PlayerConfig;
use crate::executor::Executor;
use crate::runtime::{Character, Library, Scene};

/// Owns the author's script text and asset tables, and hands out playback
/// sessions over a fresh parse.
pub struct Project {
    source: String,
    library: Library,
    script: Arc<Script>,
}

impl Project {
    pub fn new(library: Library) -> Self {
        Self {
            source: String::new(),
            library,
            script: Arc::new(Script::default()),
        }
    }

    pub fn with_source(library: Library, source: impl Into<String>) -> Self {
        let mut project = Self::new(library);
        project.set_source(source);
        project
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Appends `snippet` on a new line.
    pub fn append_snippet(&mut self, snippet: &str) {
        self.source.push('\n');
        self.source.push_str(snippet);
    }

    pub fn load_script(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {:?}", path))?;
        info!("Loaded script {:?} ({} bytes)", path, content.len());
        self.source = content;
        Ok(())
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn add_character(&mut self, name: impl Into<String>, image: impl Into<String>) -> &Character {
        self.library.characters.register(name, image)
    }

    pub fn add_scene(&mut self, name: impl Into<String>, image: impl Into<String>) -> &Scene {
        self.library.scenes.register(name, image)
    }

    /// Parses the current text, replacing the previous sequence wholesale.
    pub fn parse(&mut self) -> Arc<Script> {
        self.script = Arc::new(Parser::new(&self.source).parse());
        self.script.clone()
    }

    /// The sequence from the last [`Project::parse`].
    pub fn script(&self) -> Arc<Script> {
        self.script.clone()
    }

    /// Parses the current text and starts a session over it. Later edits do
    /// not touch the returned session.
    pub fn play(&mut self, cfg: &PlayerConfig) -> Executor {
        let script = self.parse();
        let mut exe = Executor::with_config(script, self.library.clone(), cfg);
        exe.start();
        exe
    }

    /// Drafts a snippet with `generator`. Inserting it is left to the caller
    /// via [`Project::append_snippet`].
    pub fn assist(&self, generator: &dyn TextGenerator, prompt: &str) -> Result<Option<String>> {
        assist::request_snippet(generator, &self.library, prompt)
    }
}
