//! Scripted console shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use parlor_games::Console;

/// Answers prompts by looking at the last prompt shown.
///
/// - hit-or-stay: next entry of `moves`, then "s" forever
/// - square selection: next entry of `cells`, then the lowest listed cell
/// - play again: next entry of `replays`
pub struct ScriptedPlayer {
    pub moves: VecDeque<String>,
    pub cells: VecDeque<String>,
    pub replays: VecDeque<String>,
    pub transcript: Vec<String>,
    pub pauses: Vec<Duration>,
    last_prompt: String,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self {
            moves: VecDeque::new(),
            cells: VecDeque::new(),
            replays: VecDeque::new(),
            transcript: Vec::new(),
            pauses: Vec::new(),
            last_prompt: String::new(),
        }
    }

    pub fn with_moves(mut self, moves: &[&str]) -> Self {
        self.moves = moves.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_cells(mut self, cells: &[&str]) -> Self {
        self.cells = cells.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_replays(mut self, replays: &[&str]) -> Self {
        self.replays = replays.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn text(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn count(&self, needle: &str) -> usize {
        self.transcript.iter().filter(|line| line.contains(needle)).count()
    }
}

impl Console for ScriptedPlayer {
    fn say(&mut self, text: &str) -> io::Result<()> {
        if let Some(prompt) = text.strip_prefix("=> ") {
            self.last_prompt = prompt.to_string();
        }
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }

    fn read_line(&mut self) -> io::Result<String> {
        let prompt = self.last_prompt.clone();

        let answer = if prompt.contains("(h)it or (s)tay") {
            self.moves.pop_front().unwrap_or_else(|| "s".to_string())
        } else if let Some(list) = prompt.strip_prefix("Please select a square: ") {
            self.cells.pop_front().unwrap_or_else(|| {
                list.split(|c: char| !c.is_ascii_digit())
                    .find(|s| !s.is_empty())
                    .unwrap_or("")
                    .to_string()
            })
        } else if prompt.contains("play again") {
            self.replays
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no replay answer scripted"))?
        } else {
            return Err(io::Error::new(io::ErrorKind::Other, format!("unexpected prompt: {prompt}")));
        };

        self.transcript.push(format!("<< {answer}"));
        Ok(answer)
    }
}
