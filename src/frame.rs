//! The byte-stream Frame Parser (§4.2): a two-state machine that turns a
//! raw byte stream into a queue of decoded [`Command`]s.

use std::collections::VecDeque;

use crate::command::Command;
use crate::decode;

/// Runtime-tunable frame parser behavior.
#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    /// Maximum payload length (excluding the leading `:` and trailing
    /// `#`) before a frame is dropped rather than buffered further.
    pub maxlen: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { maxlen: 32 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameState {
    Idle,
    Parsing,
    /// The buffer hit `maxlen` without seeing `#`; every further byte is
    /// dropped until `#` ends the frame.
    Overflowing,
}

/// One frame parser per connection. Never blocks, never fails: malformed
/// input is silently dropped, matching the reference parser's `feed_one`.
#[derive(Debug)]
pub struct Frame {
    state: FrameState,
    buffer: String,
    config: ParserConfig,
    queue: VecDeque<Command>,
}

impl Frame {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            state: FrameState::Idle,
            buffer: String::new(),
            config,
            queue: VecDeque::new(),
        }
    }

    /// Feeds a chunk of bytes through the state machine, queuing any
    /// commands it completes along the way.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.feed_one(byte);
        }
    }

    fn feed_one(&mut self, byte: u8) {
        match self.state {
            FrameState::Idle => match byte {
                0x06 => self.queue.push_back(Command::ack()),
                0x04 => self.queue.push_back(Command::eot()),
                b':' => {
                    self.buffer.clear();
                    self.state = FrameState::Parsing;
                }
                _ => {}
            },
            FrameState::Parsing => match byte {
                b'#' => {
                    let command = decode::decode(&self.buffer);
                    self.queue.push_back(command);
                    self.buffer.clear();
                    self.state = FrameState::Idle;
                }
                other => {
                    if self.buffer.len() >= self.config.maxlen {
                        self.state = FrameState::Overflowing;
                    } else {
                        self.buffer.push(other as char);
                    }
                }
            },
            FrameState::Overflowing => match byte {
                b'#' => {
                    self.buffer.clear();
                    self.state = FrameState::Idle;
                }
                _ => {}
            },
        }
    }

    /// Pops the oldest queued command, if any.
    pub fn next_command(&mut self) -> Option<Command> {
        self.queue.pop_front()
    }

    /// Drains every queued command in arrival order.
    pub fn drain(&mut self) -> Vec<Command> {
        self.queue.drain(..).collect()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandId;

    #[test]
    fn ack_byte_in_idle_state_emits_ack() {
        let mut frame = Frame::new();
        frame.feed(&[0x06]);
        assert_eq!(frame.next_command().unwrap().id, CommandId::Ack);
    }

    #[test]
    fn ack_byte_mid_frame_is_swallowed_as_payload() {
        let mut frame = Frame::new();
        frame.feed(b":G");
        frame.feed(&[0x06]);
        frame.feed(b"#");
        let command = frame.next_command().unwrap();
        assert_eq!(command.id, CommandId::Unknown);
    }

    #[test]
    fn framed_command_decodes() {
        let mut frame = Frame::new();
        frame.feed(b":GA#");
        assert_eq!(frame.next_command().unwrap().id, CommandId::GetAltitude);
        assert!(frame.next_command().is_none());
    }

    #[test]
    fn colon_inside_payload_is_ordinary_content() {
        let mut frame = Frame::new();
        frame.feed(b":Sr12:34:56#");
        let command = frame.next_command().unwrap();
        assert_eq!(command.id, CommandId::SetTargetRightAscension);
    }

    #[test]
    fn overlong_frame_without_terminator_is_dropped() {
        let mut frame = Frame::with_config(ParserConfig { maxlen: 4 });
        frame.feed(b":ABCDEFGHIJ#");
        assert!(frame.next_command().is_none());
    }

    #[test]
    fn commands_queue_in_arrival_order() {
        let mut frame = Frame::new();
        frame.feed(b":GA#:GZ#");
        let drained = frame.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].id, CommandId::GetAltitude);
        assert_eq!(drained[1].id, CommandId::GetAzimuth);
    }
}
