//! Incremental decoder for OpenAI-style SSE completion streams.
//!
//! Bytes arrive in arbitrary chunks; lines (and UTF-8 sequences) may be split
//! across them. Only complete lines are interpreted:
//!
//! - a trailing `\r` is dropped
//! - blank lines and `:` comments are skipped
//! - lines without the `data: ` prefix are ignored
//! - `data: [DONE]` ends the stream; later input is discarded
//! - other frames are JSON; `choices[0].delta.content` is the text delta

use serde::Deserialize;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// An item decoded from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    Delta(String),
    Done,
}

#[derive(Debug, Default)]
pub struct SseLineDecoder {
    buffer: Vec<u8>,
    done: bool,
}

impl SseLineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feeds a chunk and returns the events completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        let mut events = Vec::new();
        if self.done {
            return events;
        }
        self.buffer.extend_from_slice(chunk);

        while let Some(newline) = self.buffer.iter().position(|b| *b == b'\n') {
            let line_bytes: Vec<u8> = self.buffer.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&line_bytes[..newline]);

            match decode_line(&line) {
                LineOutcome::Skip => {}
                LineOutcome::Delta(text) => events.push(SseEvent::Delta(text)),
                LineOutcome::Done => {
                    self.done = true;
                    self.buffer.clear();
                    events.push(SseEvent::Done);
                    break;
                }
            }
        }

        events
    }
}

enum LineOutcome {
    Skip,
    Delta(String),
    Done,
}

fn decode_line(line: &str) -> LineOutcome {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.starts_with(':') || line.trim().is_empty() {
        return LineOutcome::Skip;
    }
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return LineOutcome::Skip;
    };

    let payload = payload.trim();
    if payload == DONE_SENTINEL {
        return LineOutcome::Done;
    }

    match serde_json::from_str::<StreamFrame>(payload) {
        Ok(frame) => frame
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|content| !content.is_empty())
            .map(LineOutcome::Delta)
            .unwrap_or(LineOutcome::Skip),
        Err(e) => {
            tracing::warn!(error = %e, "Skipping unparsable SSE frame");
            LineOutcome::Skip
        }
    }
}

#[derive(Debug, Deserialize)]
struct StreamFrame {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: StreamDelta,
}

#[derive(Debug, Default, Deserialize)]
struct StreamDelta {
    content: Option<String>,
}
