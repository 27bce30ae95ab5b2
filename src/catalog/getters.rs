//! The `G*` getter family. Most of these pair with a setter from
//! `setters`/`precision`/`tracking` and simply load the same store path
//! that setter writes; a handful (current position, firmware identity,
//! selenographic coordinates) have no setter and are load-only.

use nom::bytes::complete::tag;

use super::common::full_match;
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::FieldMap;

fn literal(mnemonic: &'static str, input: &str) -> Option<FieldMap> {
    full_match(tag(mnemonic), input).map(|_| FieldMap::new())
}

fn parse_menu_entry_0(input: &str) -> Option<FieldMap> {
    literal("G0", input)
}
fn parse_menu_entry_1(input: &str) -> Option<FieldMap> {
    literal("G1", input)
}
fn parse_menu_entry_2(input: &str) -> Option<FieldMap> {
    literal("G2", input)
}
fn parse_local_time_12h(input: &str) -> Option<FieldMap> {
    literal("Ga", input)
}
fn parse_altitude(input: &str) -> Option<FieldMap> {
    literal("GA", input)
}
fn parse_browse_brighter_limit(input: &str) -> Option<FieldMap> {
    literal("Gb", input)
}
fn parse_date(input: &str) -> Option<FieldMap> {
    literal("GC", input)
}
fn parse_clock_format(input: &str) -> Option<FieldMap> {
    literal("Gc", input)
}
fn parse_declination(input: &str) -> Option<FieldMap> {
    literal("GD", input)
}
fn parse_selected_declination(input: &str) -> Option<FieldMap> {
    literal("Gd", input)
}
fn parse_selenographic_latitude(input: &str) -> Option<FieldMap> {
    literal("GE", input)
}
fn parse_selenographic_longitude(input: &str) -> Option<FieldMap> {
    literal("Ge", input)
}
fn parse_find_field_diameter(input: &str) -> Option<FieldMap> {
    literal("GF", input)
}
fn parse_browse_faint_limit(input: &str) -> Option<FieldMap> {
    literal("Gf", input)
}
fn parse_utc_offset_time(input: &str) -> Option<FieldMap> {
    literal("GG", input)
}
fn parse_site_longitude(input: &str) -> Option<FieldMap> {
    literal("Gg", input)
}
fn parse_dst_settings(input: &str) -> Option<FieldMap> {
    literal("GH", input)
}
fn parse_high_limit(input: &str) -> Option<FieldMap> {
    literal("Gh", input)
}
fn parse_local_time_24h(input: &str) -> Option<FieldMap> {
    literal("GL", input)
}
fn parse_distance_to_meridian(input: &str) -> Option<FieldMap> {
    literal("Gm", input)
}
fn parse_larger_size_limit(input: &str) -> Option<FieldMap> {
    literal("Gl", input)
}
fn parse_site1_name(input: &str) -> Option<FieldMap> {
    literal("GM", input)
}
fn parse_site2_name(input: &str) -> Option<FieldMap> {
    literal("GN", input)
}
fn parse_site3_name(input: &str) -> Option<FieldMap> {
    literal("GO", input)
}
fn parse_site4_name(input: &str) -> Option<FieldMap> {
    literal("GP", input)
}
fn parse_backlash_values(input: &str) -> Option<FieldMap> {
    literal("GpB", input)
}
fn parse_home_data(input: &str) -> Option<FieldMap> {
    literal("GpH", input)
}
fn parse_sensor_offsets(input: &str) -> Option<FieldMap> {
    literal("GpS", input)
}
fn parse_lower_limit(input: &str) -> Option<FieldMap> {
    literal("Go", input)
}
fn parse_minimum_quality(input: &str) -> Option<FieldMap> {
    literal("Gq", input)
}
fn parse_right_ascension(input: &str) -> Option<FieldMap> {
    literal("GR", input)
}
fn parse_selected_right_ascension(input: &str) -> Option<FieldMap> {
    literal("Gr", input)
}
fn parse_sidereal_time(input: &str) -> Option<FieldMap> {
    literal("GS", input)
}
fn parse_smaller_size_limit(input: &str) -> Option<FieldMap> {
    literal("Gs", input)
}
fn parse_tracking_rate(input: &str) -> Option<FieldMap> {
    literal("GT", input)
}
fn parse_site_latitude(input: &str) -> Option<FieldMap> {
    literal("Gt", input)
}
fn parse_firmware_date(input: &str) -> Option<FieldMap> {
    literal("GVD", input)
}
fn parse_firmware_number(input: &str) -> Option<FieldMap> {
    literal("GVN", input)
}
fn parse_product_name(input: &str) -> Option<FieldMap> {
    literal("GVP", input)
}
fn parse_firmware_time(input: &str) -> Option<FieldMap> {
    literal("GVT", input)
}
fn parse_alignment_status(input: &str) -> Option<FieldMap> {
    literal("GW", input)
}
fn parse_deepsky_search_string(input: &str) -> Option<FieldMap> {
    literal("Gy", input)
}
fn parse_azimuth(input: &str) -> Option<FieldMap> {
    literal("GZ", input)
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        // Firmware identity and the `Gp*` combined-diagnostic family are
        // three letters; declared first so they can never be shadowed by
        // a hypothetical shorter prefix.
        CatalogEntry::new(CommandId::GetFirmwareDate, parse_firmware_date)
            .load("firmware.date"),
        CatalogEntry::new(CommandId::GetFirmwareNumber, parse_firmware_number)
            .load("firmware.number"),
        CatalogEntry::new(CommandId::GetProductName, parse_product_name)
            .load("firmware.product_name"),
        CatalogEntry::new(CommandId::GetFirmwareTime, parse_firmware_time)
            .load("firmware.time"),
        CatalogEntry::new(CommandId::GetBacklashValues, parse_backlash_values)
            .load("mount.backlash.combined"),
        CatalogEntry::new(CommandId::GetHomeData, parse_home_data).load("mount.home_data"),
        CatalogEntry::new(CommandId::GetSensorOffsets, parse_sensor_offsets)
            .load("mount.sensor_offsets"),
        CatalogEntry::new(CommandId::GetAlignmentMenuEntry0, parse_menu_entry_0)
            .load("ui.menu_entry_0"),
        CatalogEntry::new(CommandId::GetAlignmentMenuEntry1, parse_menu_entry_1)
            .load("ui.menu_entry_1"),
        CatalogEntry::new(CommandId::GetAlignmentMenuEntry2, parse_menu_entry_2)
            .load("ui.menu_entry_2"),
        CatalogEntry::new(CommandId::GetLocalTime12H, parse_local_time_12h)
            .load("site.local_time"),
        CatalogEntry::new(CommandId::GetAltitude, parse_altitude).load("mount.current.altitude"),
        CatalogEntry::new(
            CommandId::GetBrowseBrighterMagnitudeLimit,
            parse_browse_brighter_limit,
        )
        .load("find.brighter_magnitude_limit"),
        CatalogEntry::new(CommandId::GetDate, parse_date).load("site.date"),
        CatalogEntry::new(CommandId::GetClockFormat, parse_clock_format)
            .load("site.clock_format_24h"),
        CatalogEntry::new(CommandId::GetDeclination, parse_declination)
            .load("mount.current.declination"),
        CatalogEntry::new(
            CommandId::GetSelectedObjectDeclination,
            parse_selected_declination,
        )
        .load("mount.target.declination"),
        CatalogEntry::new(CommandId::GetSelenographicLatitude, parse_selenographic_latitude)
            .load("mount.selenographic.latitude"),
        CatalogEntry::new(CommandId::GetSelenographicLongitude, parse_selenographic_longitude)
            .load("mount.selenographic.longitude"),
        CatalogEntry::new(CommandId::GetFindFieldDiameter, parse_find_field_diameter)
            .load("find.field_diameter"),
        CatalogEntry::new(
            CommandId::GetBrowseFaintMagnitudeLimit,
            parse_browse_faint_limit,
        )
        .load("find.faint_magnitude_limit"),
        CatalogEntry::new(CommandId::GetUTCOffsetTime, parse_utc_offset_time)
            .load("site.utc_offset"),
        CatalogEntry::new(CommandId::GetSiteLongitude, parse_site_longitude)
            .load("site.longitude"),
        CatalogEntry::new(
            CommandId::GetDailySavingsTimeSettings,
            parse_dst_settings,
        )
        .load("site.dst_enabled"),
        CatalogEntry::new(CommandId::GetHighLimit, parse_high_limit).load("mount.limits.high"),
        CatalogEntry::new(CommandId::GetLocalTime24H, parse_local_time_24h)
            .load("site.local_time"),
        CatalogEntry::new(CommandId::GetDistanceToMeridian, parse_distance_to_meridian)
            .load("mount.distance_to_meridian"),
        CatalogEntry::new(CommandId::GetLargerSizeLimit, parse_larger_size_limit)
            .load("find.largest_object_size"),
        CatalogEntry::new(CommandId::GetSite1Name, parse_site1_name).load("site.names.site_1"),
        CatalogEntry::new(CommandId::GetSite2Name, parse_site2_name).load("site.names.site_2"),
        CatalogEntry::new(CommandId::GetSite3Name, parse_site3_name).load("site.names.site_3"),
        CatalogEntry::new(CommandId::GetSite4Name, parse_site4_name).load("site.names.site_4"),
        CatalogEntry::new(CommandId::GetLowerLimit, parse_lower_limit).load("mount.limits.low"),
        CatalogEntry::new(CommandId::GetMinimumQualityForFind, parse_minimum_quality)
            .load("find.minimum_quality"),
        CatalogEntry::new(CommandId::GetRightAscension, parse_right_ascension)
            .load("mount.current.right_ascension"),
        CatalogEntry::new(
            CommandId::GetSelectedObjectRightAscension,
            parse_selected_right_ascension,
        )
        .load("mount.target.right_ascension"),
        CatalogEntry::new(CommandId::GetSiderealTime, parse_sidereal_time)
            .load("site.sidereal_time"),
        // See `setters::parse_smallest_object_size` / `parse_largest_object_size`
        // for why `Gs` loads the *smallest* path and `Gl` the *largest*.
        CatalogEntry::new(CommandId::GetSmallerSizeLimit, parse_smaller_size_limit)
            .load("find.smallest_object_size"),
        CatalogEntry::new(CommandId::GetTrackingRate, parse_tracking_rate)
            .load("mount.tracking.rate"),
        CatalogEntry::new(CommandId::GetSiteLatitude, parse_site_latitude)
            .load("site.latitude"),
        CatalogEntry::new(CommandId::GetAlignmentStatus, parse_alignment_status)
            .load("mount.alignment_status"),
        CatalogEntry::new(CommandId::GetDeepskySearchString, parse_deepsky_search_string)
            .load("find.object_selection_string"),
        CatalogEntry::new(CommandId::GetAzimuth, parse_azimuth).load("mount.current.azimuth"),
    ]
}
