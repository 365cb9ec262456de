use std::io::{self, BufRead, Write};
use crate::event::{InputEvent, OutputEvent};
use crate::renderer::Renderer;
use crate::runtime::PresentationState;

/// Line-based renderer: prints stage changes, types dialogue out as it is
/// revealed, and waits for Enter (or `exit`) when input is expected.
pub struct TerminalRenderer<R, W> {
    input: R,
    output: W,
    last: PresentationState,
    printed: usize,
}

impl TerminalRenderer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalRenderer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, last: PresentationState::default(), printed: 0 }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn draw_stage(&mut self, state: &PresentationState) -> io::Result<()> {
        if state.background != self.last.background {
            match &state.background {
                Some(scene) => writeln!(self.output, "[Scene] {}", scene.name)?,
                None => writeln!(self.output, "[Scene] -")?,
            }
        }
        for sprite in &state.visible {
            if self.last.sprite(&sprite.character.id) != Some(sprite) {
                writeln!(self.output, "[Show] {} at {}", sprite.character.name, sprite.position)?;
            }
        }
        for sprite in &self.last.visible {
            if !state.is_visible(&sprite.character.id) {
                writeln!(self.output, "[Hide] {}", sprite.character.name)?;
            }
        }
        if state.dialogue.as_ref().map(|d| d.source) != self.last.dialogue.as_ref().map(|d| d.source) {
            self.printed = 0;
        }
        self.last = state.clone();
        Ok(())
    }

    fn draw_reveal(&mut self, speaker: Option<&str>, text: &str, complete: bool) -> io::Result<()> {
        let shown: Vec<char> = text.chars().collect();
        if shown.len() < self.printed {
            self.printed = 0;
        }
        if self.printed == 0 && !shown.is_empty() {
            match speaker {
                Some(name) => write!(self.output, "{}: ", name)?,
                None => write!(self.output, "  ")?,
            }
        }
        let fresh: String = shown[self.printed..].iter().collect();
        write!(self.output, "{}", fresh)?;
        self.printed = shown.len();
        if complete {
            writeln!(self.output)?;
        }
        self.output.flush()
    }

    fn wait_continue(&mut self) -> io::Result<InputEvent> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(InputEvent::Close);
        }
        if buf.trim().eq_ignore_ascii_case("exit") {
            return Ok(InputEvent::Close);
        }
        Ok(InputEvent::Advance)
    }

    fn handle(&mut self, out: &OutputEvent) -> io::Result<Option<InputEvent>> {
        match out {
            OutputEvent::Stage { state, .. } => {
                self.draw_stage(state)?;
                Ok(None)
            }
            OutputEvent::Reveal { speaker, text, complete } => {
                self.draw_reveal(speaker.as_deref(), text, *complete)?;
                Ok(None)
            }
            OutputEvent::WaitInput => self.wait_continue().map(Some),
            OutputEvent::End => {
                writeln!(self.output, "[End]")?;
                Ok(None)
            }
        }
    }
}

impl<R: BufRead, W: Write> Renderer for TerminalRenderer<R, W> {
    fn render(&mut self, out: &OutputEvent) -> Option<InputEvent> {
        self.handle(out).unwrap_or_else(|e| {
            log::error!("terminal renderer: {}", e);
            Some(InputEvent::Close)
        })
    }
}
