//! A codec and in-memory simulator for the Meade LX200 telescope control
//! protocol: parse a byte stream into typed commands, hold state for the
//! getters that read back what the setters wrote, and format wire-correct
//! responses.
//!
//! The core triad is [`frame`]/[`decode`] (bytes in, [`command::Command`]
//! out), [`store`] (the mutable state those commands read and write), and
//! [`response`] (the bytes that go back out). [`dispatch`] wires the three
//! together for a transport to drive; [`catalog`] is the declarative table
//! everything else is built from.

#![deny(missing_debug_implementations)]

pub mod catalog;
pub mod command;
pub mod decode;
pub mod dispatch;
pub mod error;
pub mod field;
pub mod frame;
pub mod response;
pub mod store;

pub use command::{Command, CommandId};
pub use dispatch::{DispatchError, Dispatcher};
pub use error::{DecodeError, FormatError, StoreError};
pub use field::{Field, FieldMap};
pub use frame::{Frame, ParserConfig};
pub use response::{Response, ResponseKind};
pub use store::{Store, StoreConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_check_passes() {
        if let Err(issues) = catalog::self_check() {
            panic!("catalog/response mismatch: {issues:?}");
        }
    }
}
