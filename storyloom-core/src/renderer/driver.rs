use std::thread;
use std::time::{Duration, Instant};
use crate::executor::Executor;
use crate::renderer::Renderer;

/// Pumps an [`Executor`] against a renderer on one thread: advance the reveal
/// clock, hand queued events to the renderer, feed back its input.
pub struct Driver<R: Renderer> {
    exe: Executor,
    renderer: R,
    frame: Duration,
}

impl<R: Renderer> Driver<R> {
    pub fn new(exe: Executor, renderer: R, frame: Duration) -> Self {
        Self { exe, renderer, frame }
    }

    /// Runs until the session terminates.
    pub fn run(&mut self) {
        self.exe.start();
        let mut last = Instant::now();
        while !self.exe.is_terminated() {
            let now = Instant::now();
            self.exe.update(now - last);
            last = now;

            if self.pump() {
                // input may have blocked, don't count it as reveal time
                last = Instant::now();
                continue;
            }
            thread::sleep(self.frame);
        }
        self.pump();
    }

    /// Renders queued events until one yields input. Returns true if input
    /// was fed back.
    fn pump(&mut self) -> bool {
        while let Some(ev) = self.exe.pop() {
            if let Some(input) = self.renderer.render(&ev) {
                log::trace!("input {:?} after {:?}", input, ev);
                self.exe.feed(input);
                return true;
            }
        }
        false
    }

    pub fn executor(&self) -> &Executor {
        &self.exe
    }

    pub fn into_parts(self) -> (Executor, R) {
        (self.exe, self.renderer)
    }
}
