//! The Response Catalog: a second table mapping each [`CommandId`] to the
//! shape of wire bytes it replies with, completing the store/getter
//! pairing the Command Catalog sets up.
//!
//! Several of the shapes named in the design notes (site names, menu
//! entries, product identity, home/sensor diagnostics, deep-sky search
//! strings) render identically — a short string, or a bare integer,
//! followed by `#` — so they share [`ResponseKind::Text`] /
//! [`ResponseKind::Number`] rather than each getting its own variant that
//! would format the same way.

mod format;

use crate::command::CommandId;
use crate::field::FieldMap;

/// The wire shape a response renders as. Carries only `'static`/`Copy`
/// configuration; the values it renders come from `Response::fields`,
/// populated by the command's parsed arguments and the store fill step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseKind {
    /// Formats to `b""`. Movement, halts, alignment, anti-backlash,
    /// reticle, home, and PEC toggles.
    Empty,
    /// A truthy/falsy token, `"1"`/`"0"` by default, no terminator.
    /// `invert` flips which boolean value renders as which token;
    /// `true_override` substitutes a different string for the true case
    /// (`SetHandboxDate`'s startup message, `SetTrackingRate`'s `"2"`).
    Boolean {
        invert: bool,
        true_override: Option<&'static str>,
    },
    /// A single letter, no terminator: the reply to the raw ACK byte.
    Ack,
    /// `±DD*MM['SS]#`; seconds included only at high precision.
    SignedDms,
    /// `±HH:MM:SS#` at high precision, `±HH:MM.m#` at low precision.
    Hms,
    /// `±0F.F#`, 5 characters wide including the mandatory sign.
    SignedFloat,
    /// `MM/DD/YY#`.
    Date,
    /// `HH:MM:SS#`.
    LocalTime,
    /// `MMM DD YYYY#` (month rendered as a three-letter name).
    FirmwareDate,
    /// `MAJ.MIN#`.
    FirmwareNumber,
    /// `N` pipe characters then `#`, `N` in `0..=6`.
    DistanceBars,
    /// Three characters: mount mode, tracking state, alignment star count
    /// (`0..=3`), then `#`.
    AlignmentStatus,
    /// `"24"#` or `"12"#`.
    ClockFormat,
    /// A short string field, `#` terminated.
    Text,
    /// A bare integer, `#` terminated.
    Number,
    /// `MS`'s feasibility reply: `"0"` (no terminator) if possible, or
    /// `"1<reason>#"` if not.
    SlewPossibility,
}

/// A response under construction: its shape plus whatever fields the
/// command's arguments and the store fill step have populated.
#[derive(Debug, Clone)]
pub struct Response {
    pub kind: ResponseKind,
    pub fields: FieldMap,
}

impl Response {
    pub fn new(kind: ResponseKind, fields: FieldMap) -> Self {
        Self { kind, fields }
    }
}

macro_rules! empty_for {
    ($($id:expr),* $(,)?) => {
        [$(($id, ResponseKind::Empty)),*]
    };
}

const ALWAYS_EMPTY: &[(CommandId, ResponseKind)] = &empty_for![
    CommandId::Eot,
    CommandId::AutomaticAlignment,
    CommandId::LandAlignment,
    CommandId::PolarAlignment,
    CommandId::AltAzAlignment,
    CommandId::SetAltitudeAntiBacklash,
    CommandId::SetAzimuthAntiBacklash,
    CommandId::IncreaseReticleBrightness,
    CommandId::DecreaseReticleBrightness,
    CommandId::SetReticleFlashRate,
    CommandId::SetReticleFlashDutyCycle,
    CommandId::FocuserMoveIn,
    CommandId::FocuserMoveOut,
    CommandId::FocuserSlewToPosition,
    CommandId::FocuserMoveDirection,
    CommandId::FocuserHalt,
    CommandId::FocuserDeletePreset,
    CommandId::FocuserSetPresetName,
    CommandId::FocuserSelectPreset,
    CommandId::FocuserSetSlow,
    CommandId::FocuserSetFast,
    CommandId::FocuserSelectRate,
    CommandId::CalibrateHomePosition,
    CommandId::SeekHomePosition,
    CommandId::BypassDSTEntry,
    CommandId::Sleep,
    CommandId::Park,
    CommandId::SetParkPosition,
    CommandId::WakeUp,
    CommandId::ToggleTimeFormat,
    CommandId::Initialize,
    CommandId::MoveEast,
    CommandId::MoveNorth,
    CommandId::MoveSouth,
    CommandId::MoveWest,
    CommandId::GuideNorth,
    CommandId::GuideSouth,
    CommandId::GuideEast,
    CommandId::GuideWest,
    CommandId::HighPrecisionToggle,
    CommandId::PrecisionPositionToggle,
    CommandId::HaltAll,
    CommandId::HaltEastward,
    CommandId::HaltNorthward,
    CommandId::HaltSouthward,
    CommandId::HaltWestward,
    CommandId::SetSlewRateToCentering,
    CommandId::SetSlewRateToGuiding,
    CommandId::SetSlewRateToFinding,
    CommandId::SetSlewRateToMax,
    CommandId::SetRightAscensionSlewRate,
    CommandId::SetDeclinationSlewRate,
    CommandId::SetGuideRate,
    CommandId::SetBaudRate,
    CommandId::SetFieldDiameter,
    CommandId::SetFaintMagnitude,
    CommandId::SetSiteLongitude,
    CommandId::SetSiteLatitude,
    CommandId::SetUTCOffset,
    CommandId::SetDSTEnabled,
    CommandId::SetMaximumElevation,
    CommandId::SetLowestElevation,
    CommandId::SetSmallestObjectSize,
    CommandId::SetLargestObjectSize,
    CommandId::SetSite1Name,
    CommandId::SetSite2Name,
    CommandId::SetSite3Name,
    CommandId::SetSite4Name,
    CommandId::SetObjectSelectionString,
    CommandId::SetLocalTime,
    CommandId::SetLocalSiderealTime,
    CommandId::SetSlewRateNumber,
    CommandId::SetBacklashValues,
    CommandId::SetHomeData,
    CommandId::SetSensorOffsets,
    CommandId::StepQualityLimit,
    CommandId::EnableFlexureCorrection,
    CommandId::DisableFlexureCorrection,
    CommandId::EnableRightAscensionPEC,
    CommandId::DisableRightAscensionPEC,
    CommandId::EnableAltitudePEC,
    CommandId::DisableAltitudePEC,
    CommandId::EnableAzimuthPEC,
    CommandId::DisableAzimuthPEC,
    CommandId::SetLunarTracking,
    CommandId::SelectCustomTrackingRate,
    CommandId::SelectSiderealTrackingRate,
    CommandId::SelectSolarTrackingRate,
    CommandId::AdjustTrackingRate,
    CommandId::SelectSite,
];

const fn boolean(invert: bool, true_override: Option<&'static str>) -> ResponseKind {
    ResponseKind::Boolean {
        invert,
        true_override,
    }
}

const BOOLEANS: &[(CommandId, ResponseKind)] = &[
    (CommandId::QueryFocuserBusyStatus, boolean(false, None)),
    (CommandId::SlewToTargetAltAz, boolean(true, None)),
    (CommandId::SetTargetRightAscension, boolean(false, None)),
    (CommandId::SetTargetDeclination, boolean(false, None)),
    (CommandId::SetTargetAltitude, boolean(false, None)),
    (CommandId::SetTargetAzimuth, boolean(false, None)),
    (
        CommandId::SetHandboxDate,
        boolean(
            false,
            Some("1Updating  Planetary Data#                       #"),
        ),
    ),
    (CommandId::SetBrighterLimit, boolean(true, None)),
    (CommandId::SetTrackingRate, boolean(false, Some("2"))),
    (CommandId::GetDailySavingsTimeSettings, boolean(false, None)),
];

const SIGNED_DMS: &[(CommandId, ResponseKind)] = &[
    (CommandId::GetAltitude, ResponseKind::SignedDms),
    (CommandId::GetDeclination, ResponseKind::SignedDms),
    (
        CommandId::GetSelectedObjectDeclination,
        ResponseKind::SignedDms,
    ),
    (CommandId::GetSelenographicLatitude, ResponseKind::SignedDms),
    (CommandId::GetSelenographicLongitude, ResponseKind::SignedDms),
    (CommandId::GetSiteLongitude, ResponseKind::SignedDms),
    (CommandId::GetSiteLatitude, ResponseKind::SignedDms),
    (CommandId::GetAzimuth, ResponseKind::SignedDms),
];

const HMS: &[(CommandId, ResponseKind)] = &[
    (CommandId::GetRightAscension, ResponseKind::Hms),
    (
        CommandId::GetSelectedObjectRightAscension,
        ResponseKind::Hms,
    ),
    (CommandId::GetSiderealTime, ResponseKind::Hms),
];

const SIGNED_FLOAT: &[(CommandId, ResponseKind)] = &[
    (
        CommandId::GetBrowseBrighterMagnitudeLimit,
        ResponseKind::SignedFloat,
    ),
    (
        CommandId::GetBrowseFaintMagnitudeLimit,
        ResponseKind::SignedFloat,
    ),
    (CommandId::GetUTCOffsetTime, ResponseKind::SignedFloat),
    (CommandId::GetDistanceToMeridian, ResponseKind::SignedFloat),
    (CommandId::GetTrackingRate, ResponseKind::SignedFloat),
];

const NUMBER: &[(CommandId, ResponseKind)] = &[
    (CommandId::GetFindFieldDiameter, ResponseKind::Number),
    (CommandId::GetHighLimit, ResponseKind::Number),
    (CommandId::GetLargerSizeLimit, ResponseKind::Number),
    (CommandId::GetBacklashValues, ResponseKind::Number),
    (CommandId::GetSensorOffsets, ResponseKind::Number),
    (CommandId::GetLowerLimit, ResponseKind::Number),
    (CommandId::GetSmallerSizeLimit, ResponseKind::Number),
];

const TEXT: &[(CommandId, ResponseKind)] = &[
    (CommandId::GetAlignmentMenuEntry0, ResponseKind::Text),
    (CommandId::GetAlignmentMenuEntry1, ResponseKind::Text),
    (CommandId::GetAlignmentMenuEntry2, ResponseKind::Text),
    (CommandId::GetSite1Name, ResponseKind::Text),
    (CommandId::GetSite2Name, ResponseKind::Text),
    (CommandId::GetSite3Name, ResponseKind::Text),
    (CommandId::GetSite4Name, ResponseKind::Text),
    (CommandId::GetHomeData, ResponseKind::Text),
    (CommandId::GetProductName, ResponseKind::Text),
    (CommandId::GetDeepskySearchString, ResponseKind::Text),
    (CommandId::QueryHomeStatus, ResponseKind::Text),
    (CommandId::SyncSelenographic, ResponseKind::Text),
    (CommandId::SyncDatabase, ResponseKind::Text),
    (CommandId::GetMinimumQualityForFind, ResponseKind::Text),
];

const MISC: &[(CommandId, ResponseKind)] = &[
    (CommandId::Ack, ResponseKind::Ack),
    (CommandId::DistanceBars, ResponseKind::DistanceBars),
    (CommandId::GetDate, ResponseKind::Date),
    (CommandId::GetLocalTime12H, ResponseKind::LocalTime),
    (CommandId::GetLocalTime24H, ResponseKind::LocalTime),
    (CommandId::GetFirmwareTime, ResponseKind::LocalTime),
    (CommandId::GetClockFormat, ResponseKind::ClockFormat),
    (CommandId::GetFirmwareDate, ResponseKind::FirmwareDate),
    (CommandId::GetFirmwareNumber, ResponseKind::FirmwareNumber),
    (CommandId::GetAlignmentStatus, ResponseKind::AlignmentStatus),
    (CommandId::SlewToTarget, ResponseKind::SlewPossibility),
];

/// Looks up the response shape for a [`CommandId`]. Returns `None` for
/// `Unknown` (no response is ever sent) and for any command this catalog
/// has not yet mapped, which [`crate::catalog::self_check`] surfaces.
pub fn constructor_for(id: CommandId) -> Option<ResponseKind> {
    ALWAYS_EMPTY
        .iter()
        .chain(BOOLEANS)
        .chain(SIGNED_DMS)
        .chain(HMS)
        .chain(SIGNED_FLOAT)
        .chain(NUMBER)
        .chain(TEXT)
        .chain(MISC)
        .find(|(i, _)| *i == id)
        .map(|(_, kind)| *kind)
}
