mod frame;
mod walk;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use loomscript_core::Script;
use frame::Frame;
use crate::config::PlayerConfig;
use crate::event::{InputEvent, OutputEvent};
use crate::runtime::{Library, PresentationState};
use crate::typewriter::Typewriter;

pub use walk::walk_instruction;

/// Replays `script[0..=cursor]` from an empty stage. Total: a cursor past the
/// end replays the whole script.
pub fn replay(script: &Script, cursor: usize, library: &Library) -> PresentationState {
    let mut state = PresentationState::default();
    for (index, ins) in script.iter().enumerate().take(cursor.saturating_add(1)) {
        walk_instruction(&mut state, library, index, ins);
    }
    state
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Playing,
    Terminated,
}

/// What a call to [`Executor::next`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The rest of the current line was revealed; the cursor stayed.
    Revealed,
    /// The cursor moved to the next instruction.
    Advanced,
    /// The last instruction was done; the session terminated.
    Ended,
    /// The session is not playing.
    Ignored,
}

/// One playback session over a parsed script.
///
/// Goes `Idle -> Playing -> Terminated`; nothing leaves `Terminated`.
pub struct Executor {
    frame: Frame,
    library: Arc<Library>,
    stage: PresentationState,
    typewriter: Typewriter,
    status: SessionState,
    event_queue: VecDeque<OutputEvent>,
}

impl Executor {
    pub fn new(script: impl Into<Arc<Script>>, library: impl Into<Arc<Library>>, reveal_interval: Duration) -> Self {
        Executor {
            frame: Frame::new(script, 0),
            library: library.into(),
            stage: PresentationState::default(),
            typewriter: Typewriter::new(reveal_interval),
            status: SessionState::Idle,
            event_queue: VecDeque::new(),
        }
    }

    pub fn with_config(script: impl Into<Arc<Script>>, library: impl Into<Arc<Library>>, cfg: &PlayerConfig) -> Self {
        Self::new(script, library, cfg.reveal_interval())
    }

    /// Enters `Playing` at cursor 0.
    pub fn start(&mut self) {
        if self.status != SessionState::Idle {
            log::warn!("start ignored, session is {:?}", self.status);
            return;
        }
        log::info!("Playback started ({} instructions)", self.frame.script.len());
        self.status = SessionState::Playing;
        self.enter(0, true);
    }

    /// The advance trigger: finish the current reveal, else move on, else end.
    pub fn next(&mut self) -> Step {
        if self.status != SessionState::Playing {
            return Step::Ignored;
        }
        if !self.typewriter.is_complete() {
            self.typewriter.skip();
            self.push_reveal();
            self.push(OutputEvent::WaitInput);
            return Step::Revealed;
        }
        if self.frame.has_next() {
            self.frame.advance();
            self.enter(self.frame.pc, false);
            Step::Advanced
        } else {
            self.terminate("end of script");
            Step::Ended
        }
    }

    /// Moves the cursor anywhere and restarts the reveal of the line there.
    /// Out-of-range positions clamp to the last instruction.
    pub fn seek(&mut self, cursor: usize) {
        if self.status != SessionState::Playing {
            return;
        }
        let last = self.frame.script.len().saturating_sub(1);
        self.frame.pc = cursor.min(last);
        self.enter(self.frame.pc, true);
    }

    /// External close request.
    pub fn close(&mut self) {
        if self.status == SessionState::Terminated {
            return;
        }
        self.terminate("closed");
    }

    /// Lets `dt` pass for the reveal ticker.
    pub fn update(&mut self, dt: Duration) {
        if self.status != SessionState::Playing {
            return;
        }
        if self.typewriter.update(dt) {
            self.push_reveal();
            if self.typewriter.is_complete() {
                self.push(OutputEvent::WaitInput);
            }
        }
    }

    pub fn feed(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Advance => {
                self.next();
            }
            InputEvent::Close => self.close(),
        }
    }

    pub fn status(&self) -> SessionState {
        self.status
    }

    pub fn is_terminated(&self) -> bool {
        self.status == SessionState::Terminated
    }

    pub fn cursor(&self) -> usize {
        self.frame.pc
    }

    pub fn state(&self) -> &PresentationState {
        &self.stage
    }

    pub fn script(&self) -> &Script {
        &self.frame.script
    }

    pub fn revealed_len(&self) -> usize {
        self.typewriter.revealed_len()
    }

    pub fn revealed_text(&self) -> String {
        self.typewriter.visible_text()
    }

    pub fn is_revealing(&self) -> bool {
        !self.typewriter.is_complete()
    }

    pub fn pop(&mut self) -> Option<OutputEvent> {
        self.event_queue.pop_front()
    }

    pub fn drain(&mut self) -> Vec<OutputEvent> {
        self.event_queue.drain(..).collect()
    }

    fn enter(&mut self, cursor: usize, force_reset: bool) {
        let prev_source = self.stage.dialogue.as_ref().map(|d| d.source);
        self.stage = replay(&self.frame.script, cursor, &self.library);
        log::debug!("cursor {} -> {:?}", cursor, self.frame.current().map(|i| i.kind()));
        self.push(OutputEvent::Stage { cursor, state: self.stage.clone() });

        let source = self.stage.dialogue.as_ref().map(|d| d.source);
        if force_reset || source != prev_source {
            self.typewriter.set_text(self.stage.text());
            if self.stage.dialogue.is_some() {
                self.push_reveal();
            }
        }
        if self.typewriter.is_complete() {
            self.push(OutputEvent::WaitInput);
        }
    }

    fn terminate(&mut self, reason: &str) {
        self.typewriter.cancel();
        self.status = SessionState::Terminated;
        log::info!("Playback terminated: {}", reason);
        self.push(OutputEvent::End);
    }

    fn push_reveal(&mut self) {
        let ev = OutputEvent::Reveal {
            speaker: self.stage.speaker().map(str::to_string),
            text: self.typewriter.visible_text(),
            complete: self.typewriter.is_complete(),
        };
        self.push(ev);
    }

    fn push(&mut self, ev: OutputEvent) {
        self.event_queue.push_back(ev);
    }
}
