//! Black-box coverage of the wire protocol invariants and scenarios,
//! driven entirely through [`Dispatcher::handle`].

use lx200_protocol::{Command, CommandId, Dispatcher, Field, Frame, Store};

fn roundtrip(input: &[u8]) -> Vec<u8> {
    let mut store = Store::new();
    let mut dispatcher = Dispatcher::new(&mut store);
    dispatcher.handle(input).unwrap()
}

// --- Scenarios -------------------------------------------------------

#[test]
fn scenario_get_altitude_default() {
    assert_eq!(roundtrip(b":GA#"), b"+00*00'00#");
}

#[test]
fn scenario_set_then_get_right_ascension() {
    let mut store = Store::new();
    let mut dispatcher = Dispatcher::new(&mut store);

    // `Gr` (the selected-object getter) is the one that shares
    // `Sr`'s store path; `GR` reads the current (not target) position,
    // a cell no setter in this catalog ever writes.
    assert_eq!(dispatcher.handle(b":Sr12:34:56#").unwrap(), b"1");
    assert_eq!(dispatcher.handle(b":Gr#").unwrap(), b"+12:34:56#");
}

#[test]
fn scenario_set_then_get_negative_declination() {
    let mut store = Store::new();
    let mut dispatcher = Dispatcher::new(&mut store);

    dispatcher.handle(b":Sd-12:30:00#").unwrap();
    let get_reply = dispatcher.handle(b":Gd#").unwrap();
    assert_eq!(get_reply, b"-12:30:00#");

    // Inspecting the store directly only after the dispatcher's last use,
    // since it holds the store borrowed mutably for its own lifetime.
    let target = store.get("mount.target.declination").unwrap();
    assert_eq!(target.get("degrees"), Some(&Field::Int(-12)));
    assert_eq!(target.get("minutes"), Some(&Field::Int(-30)));
    assert_eq!(target.get("seconds"), Some(&Field::Int(0)));
}

#[test]
fn scenario_land_alignment() {
    let mut store = Store::new();
    let mut dispatcher = Dispatcher::new(&mut store);

    let reply = dispatcher.handle(b":AL#").unwrap();
    assert!(reply.is_empty());

    let mode = store.get("mount.alignment_mode").unwrap();
    assert_eq!(mode.get("value").unwrap().as_str(), "L");
}

#[test]
fn scenario_ack_byte_reports_alignment_mode() {
    assert_eq!(roundtrip(&[0x06]), b"A");
}

#[test]
fn scenario_unknown_command_has_no_reply() {
    let mut store = Store::new();
    let mut dispatcher = Dispatcher::new(&mut store);
    let reply = dispatcher.handle(b":XYZ#").unwrap();
    assert!(reply.is_empty());

    // The parser is back in Idle: a following well-formed command decodes
    // normally rather than being swallowed as leftover buffer content.
    let reply = dispatcher.handle(b":GA#").unwrap();
    assert_eq!(reply, b"+00*00'00#");
}

#[test]
fn scenario_pec_toggles() {
    let mut store = Store::new();
    let mut dispatcher = Dispatcher::new(&mut store);

    let first = dispatcher.handle(b":STA+#").unwrap();
    let second = dispatcher.handle(b":STZ-#").unwrap();
    assert!(first.is_empty());
    assert!(second.is_empty());

    assert_eq!(
        store.get("mount.pec.altitude").unwrap().get("enabled"),
        Some(&Field::Bool(true))
    );
    assert_eq!(
        store.get("mount.pec.azimuth").unwrap().get("enabled"),
        Some(&Field::Bool(false))
    );
}

#[test]
fn scenario_manual_tracking_rate_nudge_is_empty_not_boolean() {
    let mut store = Store::new();
    let mut dispatcher = Dispatcher::new(&mut store);

    let increase = dispatcher.handle(b":T+#").unwrap();
    let decrease = dispatcher.handle(b":T-#").unwrap();
    assert!(increase.is_empty());
    assert!(decrease.is_empty());
}

#[test]
fn scenario_minimum_quality_defaults_to_good_and_steps_by_code() {
    assert_eq!(roundtrip(b":Gq#"), b"GD#");

    let mut store = Store::new();
    let mut dispatcher = Dispatcher::new(&mut store);
    let set = dispatcher.handle(b":SU1#").unwrap();
    assert!(set.is_empty());
    assert_eq!(dispatcher.handle(b":Gq#").unwrap(), b"EX#");
}

#[test]
fn scenario_distance_bars_default_zero() {
    assert_eq!(roundtrip(b":D#"), b"#");
}

// --- Invariants --------------------------------------------------------

#[test]
fn invariant_literal_command_yields_exactly_one_and_empties_buffer() {
    let mut frame = Frame::new();
    frame.feed(b":GA#");
    let commands = frame.drain();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].id, CommandId::GetAltitude);
    assert!(frame.drain().is_empty());
}

#[test]
fn invariant_store_round_trip_via_shared_path() {
    let mut store = Store::new();
    let mut fields = lx200_protocol::FieldMap::new();
    fields.insert("hours".into(), Field::Int(3));
    fields.insert("minutes".into(), Field::Int(4));
    fields.insert("seconds".into(), Field::Int(5));
    let set = Command::new(CommandId::SetTargetRightAscension, fields);
    store.commit(&set).unwrap();

    let get = Command::new(CommandId::GetSelectedObjectRightAscension, lx200_protocol::FieldMap::new());
    let mut response = lx200_protocol::Response::new(lx200_protocol::ResponseKind::Hms, lx200_protocol::FieldMap::new());
    store.fill(&mut response, &get).unwrap();

    assert_eq!(response.fields.get("hours"), Some(&Field::Int(3)));
    assert_eq!(response.fields.get("minutes"), Some(&Field::Int(4)));
    assert_eq!(response.fields.get("seconds"), Some(&Field::Int(5)));
}

#[test]
fn invariant_junk_bytes_outside_frame_produce_no_command() {
    let mut frame = Frame::new();
    frame.feed(b"xyz123 not a frame at all");
    assert!(frame.drain().is_empty());
}

#[test]
fn invariant_overlong_frame_is_dropped_and_parser_returns_to_idle() {
    let mut frame = Frame::new();
    frame.feed(b":");
    frame.feed("A".repeat(64).as_bytes()); // default maxlen is 32, never closed with `#`
    assert!(frame.drain().is_empty());

    // The overflowed frame is only dropped once its terminator arrives;
    // framing then resumes cleanly from Idle.
    frame.feed(b"#");
    frame.feed(b":GA#");
    let commands = frame.drain();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].id, CommandId::GetAltitude);
}

#[test]
fn invariant_ack_mid_frame_is_swallowed_as_payload_not_decoded() {
    let mut frame = Frame::new();
    // An ACK byte arriving mid-frame is ordinary payload content, not a
    // second command; the reference design recognizes ACK/EOT only in Idle.
    frame.feed(b":G");
    frame.feed(&[0x06]);
    frame.feed(b"A#");
    let commands = frame.drain();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].id, CommandId::Unknown);
}

#[test]
fn invariant_ack_in_idle_is_recognized_immediately() {
    let mut frame = Frame::new();
    frame.feed(&[0x06]);
    let commands = frame.drain();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].id, CommandId::Ack);
}

#[test]
fn invariant_response_bytes_terminate_correctly() {
    // Empty-shaped commands produce zero bytes, never a stray `#`.
    assert!(roundtrip(b":AL#").is_empty());
    // Framed-shaped commands terminate with exactly one `#`.
    let reply = roundtrip(b":GA#");
    assert_eq!(reply.iter().filter(|&&b| b == b'#').count(), 1);
    assert_eq!(*reply.last().unwrap(), b'#');
    // The raw ACK byte reply carries no terminator at all.
    assert_eq!(roundtrip(&[0x06]), b"A");
}
