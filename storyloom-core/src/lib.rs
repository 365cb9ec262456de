pub mod runtime;
pub mod executor;
pub mod typewriter;
pub mod event;
pub mod renderer;
pub mod manager;
pub mod assist;
pub mod config;

pub use runtime::{Character, Library, PresentationState, Scene};
pub use executor::{replay, Executor, SessionState, Step};
pub use renderer::terminal::TerminalRenderer;
pub use event::{InputEvent, OutputEvent};
pub use manager::Project;
pub use assist::TextGenerator;
