use crate::ast::{Instruction, Script, DEFAULT_POSITION};
use once_cell::sync::Lazy;
use regex::Regex;

// Keywords match case-insensitively in ASCII only. Identifiers are ASCII word
// characters. Free text stops at line terminators, U+2028 and U+2029 included.
static SCENE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i-u:scene)\s+([^\r\n\x{2028}\x{2029}]+)").unwrap());
static SHOW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i-u:show)\s+([A-Za-z0-9_]+)(?:\s+(?i-u:at)\s+([A-Za-z0-9_]+))?").unwrap()
});
static HIDE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i-u:hide)\s+([^\r\n\x{2028}\x{2029}]+)").unwrap());
// Greedy: the text runs to the last quote on the line.
static DIALOGUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^([A-Za-z0-9_]+)\s+"([^\r\n\x{2028}\x{2029}]+)""#).unwrap());
static NARRATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"([^\r\n\x{2028}\x{2029}]+)""#).unwrap());

/// Trims whitespace and byte-order marks from both ends.
fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub struct Parser<'a> {
    src: &'a str,
    dropped: usize,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, dropped: 0 }
    }

    /// Parses the whole source. Never fails: lines that match no form are dropped.
    pub fn parse(mut self) -> Script {
        let mut body = Vec::new();
        for (idx, raw) in self.src.lines().enumerate() {
            let line = trim_text(raw);
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(ins) => body.push(ins),
                None => {
                    self.dropped += 1;
                    log::trace!("line {} dropped: {:?}", idx + 1, line);
                }
            }
        }
        log::debug!("parsed {} instructions, dropped {} lines", body.len(), self.dropped);
        Script { body }
    }
}

/// Matches one trimmed, non-empty line against the five forms, first match wins:
/// scene, show, hide, dialogue, narration.
pub fn parse_line(line: &str) -> Option<Instruction> {
    if let Some(caps) = SCENE_RE.captures(line) {
        return Some(Instruction::Scene { scene_id: trim_text(&caps[1]).to_string() });
    }

    if let Some(caps) = SHOW_RE.captures(line) {
        let position = caps.get(2).map_or(DEFAULT_POSITION, |m| m.as_str());
        return Some(Instruction::Show {
            character_id: caps[1].to_string(),
            position: position.to_string(),
        });
    }

    if let Some(caps) = HIDE_RE.captures(line) {
        return Some(Instruction::Hide { character_id: trim_text(&caps[1]).to_string() });
    }

    if let Some(caps) = DIALOGUE_RE.captures(line) {
        return Some(Instruction::Dialogue {
            character_id: Some(caps[1].to_string()),
            text: caps[2].to_string(),
        });
    }

    NARRATION_RE.captures(line).map(|caps| Instruction::Dialogue {
        character_id: None,
        text: caps[1].to_string(),
    })
}
