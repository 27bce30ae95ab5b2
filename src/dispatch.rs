//! The Dispatcher (§4.6): glues the Frame Parser, State Store, and
//! Response Catalog into the request/response cycle a transport drives.
//! Mirrors the reference `tcpserver.py`'s loop: commit, look up, fill,
//! format.

use crate::command::{Command, CommandId};
use crate::error::{FormatError, StoreError};
use crate::frame::Frame;
use crate::response::{self, Response};
use crate::store::Store;

/// One per connection (or per logical mount): owns a [`Frame`] over the
/// shared [`Store`].
#[derive(Debug)]
pub struct Dispatcher<'s> {
    frame: Frame,
    store: &'s mut Store,
}

impl<'s> Dispatcher<'s> {
    pub fn new(store: &'s mut Store) -> Self {
        Self {
            frame: Frame::new(),
            store,
        }
    }

    /// Feeds bytes in, and returns the wire bytes to write back for every
    /// command those bytes completed (in arrival order). Commands with no
    /// response mapping (only `Unknown`, by construction — see
    /// [`crate::catalog::self_check`]) produce no reply.
    pub fn handle(&mut self, input: &[u8]) -> Result<Vec<u8>, DispatchError> {
        self.frame.feed(input);
        let mut out = Vec::new();
        for command in self.frame.drain() {
            if let Some(reply) = self.dispatch_one(&command)? {
                out.extend(reply);
            }
        }
        Ok(out)
    }

    fn dispatch_one(&mut self, command: &Command) -> Result<Option<Vec<u8>>, DispatchError> {
        self.store.commit(command)?;

        let Some(kind) = response::constructor_for(command.id) else {
            if command.id != CommandId::Unknown {
                log::warn!("{:?} has no response mapping; self_check should catch this", command.id);
            }
            return Ok(None);
        };

        let mut reply = Response::new(kind, command.fields.clone());
        self.store.fill(&mut reply, command)?;
        let bytes = reply.format()?;
        Ok(Some(bytes))
    }
}

/// Everything that can go wrong serving one request/response cycle.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_byte_reports_alignment_mode() {
        let mut store = Store::new();
        let mut dispatcher = Dispatcher::new(&mut store);
        let reply = dispatcher.handle(&[0x06]).unwrap();
        assert_eq!(reply, b"A");
    }

    #[test]
    fn get_altitude_round_trips_default_zero() {
        let mut store = Store::new();
        let mut dispatcher = Dispatcher::new(&mut store);
        let reply = dispatcher.handle(b":GA#").unwrap();
        assert_eq!(reply, b"+00*00'00#");
    }

    #[test]
    fn set_then_get_target_right_ascension() {
        let mut store = Store::new();
        let mut dispatcher = Dispatcher::new(&mut store);
        let set_reply = dispatcher.handle(b":Sr12:34:56#").unwrap();
        assert_eq!(set_reply, b"1");
        let get_reply = dispatcher.handle(b":Gr#").unwrap();
        assert_eq!(get_reply, b"+12:34:56#");
    }

    #[test]
    fn unknown_command_produces_no_reply() {
        let mut store = Store::new();
        let mut dispatcher = Dispatcher::new(&mut store);
        let reply = dispatcher.handle(b":ZZ#").unwrap();
        assert!(reply.is_empty());
    }

    #[test]
    fn toggle_time_format_flips_clock_format_getter() {
        let mut store = Store::new();
        let mut dispatcher = Dispatcher::new(&mut store);
        assert_eq!(dispatcher.handle(b":Gc#").unwrap(), b"24#");
        dispatcher.handle(b":H#").unwrap();
        assert_eq!(dispatcher.handle(b":Gc#").unwrap(), b"12#");
        dispatcher.handle(b":H#").unwrap();
        assert_eq!(dispatcher.handle(b":Gc#").unwrap(), b"24#");
    }
}
