use crate::runtime::PresentationState;

#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    /// The cursor moved; `state` is the full replay up to `cursor`.
    Stage { cursor: usize, state: PresentationState },
    /// The visible prefix of the dialogue line changed.
    Reveal { speaker: Option<String>, text: String, complete: bool },
    /// Everything at the cursor is shown; the next advance moves on.
    WaitInput,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Advance,
    Close,
}
