//! The command model: a stable identity plus whatever fields its catalog
//! entry's parser extracted.

use std::borrow::Cow;

use crate::catalog;
use crate::field::{resolve_path, FieldMap};

/// The closed set of known LX200 operations, plus the `Unknown` fallback.
///
/// This is the "stable identity" the spec describes: it is the key used to
/// look up a command's store binding in the Command Catalog and its
/// formatter in the Response Catalog. Aliases (`T+`/`ST+`, `Gd`/`Gr`, ...)
/// share one variant; they are distinguished only by which catalog row
/// matched, which has no observable effect downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandId {
    Ack,
    Eot,

    // Alignment
    AutomaticAlignment,
    LandAlignment,
    PolarAlignment,
    AltAzAlignment,

    // Anti-backlash
    SetAltitudeAntiBacklash,
    SetAzimuthAntiBacklash,

    // Reticle / accessories
    IncreaseReticleBrightness,
    DecreaseReticleBrightness,
    SetReticleFlashRate,
    SetReticleFlashDutyCycle,

    // Sync
    SyncSelenographic,
    SyncDatabase,

    // Distance bars
    DistanceBars,

    // Focuser
    FocuserMoveIn,
    FocuserMoveOut,
    FocuserSlewToPosition,
    FocuserMoveDirection,
    FocuserHalt,
    FocuserDeletePreset,
    FocuserSetPresetName,
    FocuserSelectPreset,
    FocuserSetSlow,
    FocuserSetFast,
    FocuserSelectRate,
    QueryFocuserBusyStatus,

    // Getters
    GetAlignmentMenuEntry0,
    GetAlignmentMenuEntry1,
    GetAlignmentMenuEntry2,
    GetLocalTime12H,
    GetAltitude,
    GetBrowseBrighterMagnitudeLimit,
    GetDate,
    GetClockFormat,
    GetDeclination,
    GetSelectedObjectDeclination,
    GetSelenographicLatitude,
    GetSelenographicLongitude,
    GetFindFieldDiameter,
    GetBrowseFaintMagnitudeLimit,
    GetUTCOffsetTime,
    GetSiteLongitude,
    GetDailySavingsTimeSettings,
    GetHighLimit,
    GetLocalTime24H,
    GetDistanceToMeridian,
    GetLargerSizeLimit,
    GetSite1Name,
    GetSite2Name,
    GetSite3Name,
    GetSite4Name,
    GetBacklashValues,
    GetHomeData,
    GetSensorOffsets,
    GetLowerLimit,
    GetMinimumQualityForFind,
    GetRightAscension,
    GetSelectedObjectRightAscension,
    GetSiderealTime,
    GetSmallerSizeLimit,
    GetTrackingRate,
    GetSiteLatitude,
    GetFirmwareDate,
    GetFirmwareNumber,
    GetProductName,
    GetFirmwareTime,
    GetAlignmentStatus,
    GetDeepskySearchString,
    GetAzimuth,

    // Home position
    CalibrateHomePosition,
    SeekHomePosition,
    BypassDSTEntry,
    Sleep,
    Park,
    SetParkPosition,
    WakeUp,
    QueryHomeStatus,

    // Time format / init
    ToggleTimeFormat,
    Initialize,

    // Movement
    SlewToTargetAltAz,
    GuideNorth,
    GuideSouth,
    GuideEast,
    GuideWest,
    MoveEast,
    MoveNorth,
    MoveSouth,
    MoveWest,
    SlewToTarget,

    // Precision toggles
    HighPrecisionToggle,
    PrecisionPositionToggle,

    // Halt
    HaltAll,
    HaltEastward,
    HaltNorthward,
    HaltSouthward,
    HaltWestward,

    // Slew rate
    SetSlewRateToCentering,
    SetSlewRateToGuiding,
    SetSlewRateToFinding,
    SetSlewRateToMax,
    SetRightAscensionSlewRate,
    SetDeclinationSlewRate,
    SetGuideRate,

    // Setters
    SetTargetRightAscension,
    SetTargetDeclination,
    SetTargetAltitude,
    SetTargetAzimuth,
    SetBaudRate,
    SetHandboxDate,
    SetFieldDiameter,
    SetFaintMagnitude,
    SetBrighterLimit,
    SetSiteLongitude,
    SetSiteLatitude,
    SetUTCOffset,
    SetDSTEnabled,
    SetMaximumElevation,
    SetLowestElevation,
    SetSmallestObjectSize,
    SetLargestObjectSize,
    SetSite1Name,
    SetSite2Name,
    SetSite3Name,
    SetSite4Name,
    SetObjectSelectionString,
    SetLocalTime,
    SetLocalSiderealTime,
    SetSlewRateNumber,
    SetBacklashValues,
    SetHomeData,
    SetSensorOffsets,
    StepQualityLimit,
    EnableFlexureCorrection,
    DisableFlexureCorrection,

    // PEC toggles
    EnableRightAscensionPEC,
    DisableRightAscensionPEC,
    EnableAltitudePEC,
    DisableAltitudePEC,
    EnableAzimuthPEC,
    DisableAzimuthPEC,

    // Tracking
    SetLunarTracking,
    SelectCustomTrackingRate,
    SelectSiderealTrackingRate,
    SelectSolarTrackingRate,
    AdjustTrackingRate,
    SetTrackingRate,

    // Site select
    SelectSite,

    /// Fallback for any payload no catalog entry matched. Carries the raw
    /// payload verbatim as field `value`.
    Unknown,
}

/// A decoded command: a stable identity plus whatever fields its catalog
/// entry's parser extracted (empty for commands with no arguments).
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub id: CommandId,
    pub fields: FieldMap,
}

impl Command {
    pub fn new(id: CommandId, fields: FieldMap) -> Self {
        Self { id, fields }
    }

    /// The command the frame parser emits for a raw `0x06` ACK byte.
    pub fn ack() -> Self {
        Self {
            id: CommandId::Ack,
            fields: FieldMap::new(),
        }
    }

    /// The command the frame parser emits for a raw `0x04` EOT byte.
    pub fn eot() -> Self {
        Self {
            id: CommandId::Eot,
            fields: FieldMap::new(),
        }
    }

    pub fn unknown(payload: &str) -> Self {
        let mut fields = FieldMap::new();
        fields.insert("value".into(), payload.into());
        Self {
            id: CommandId::Unknown,
            fields,
        }
    }

    /// The field-map this command would write to the store: the declared
    /// `store_value` if the catalog entry has one (it always wins), falling
    /// back to the parsed fields otherwise.
    pub fn store_fields(&self) -> FieldMap {
        match catalog::entry_for(self.id).and_then(|e| e.store_value) {
            Some(make) => make(&self.fields),
            None => self.fields.clone(),
        }
    }

    /// Whether this command's catalog entry flips an existing store bool
    /// rather than writing a fixed or parsed value.
    pub fn is_toggle(&self) -> bool {
        catalog::entry_for(self.id).is_some_and(|e| e.toggle)
    }

    /// The resolved store path, after template substitution, or `None` if
    /// this command has no store binding.
    pub fn store_path(&self) -> Option<Cow<'static, str>> {
        let entry = catalog::entry_for(self.id)?;
        let template = entry.store_path.or(entry.load_path)?;
        resolve_path(template, &self.fields).map(Cow::Owned)
    }

    /// The resolved load path, after template substitution, falling back to
    /// `store_path` when the catalog entry declares no separate load path.
    pub fn load_path(&self) -> Option<Cow<'static, str>> {
        let entry = catalog::entry_for(self.id)?;
        let template = entry.load_path.or(entry.store_path)?;
        resolve_path(template, &self.fields).map(Cow::Owned)
    }
}
