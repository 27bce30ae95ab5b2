//! Setter commands: targets, baud rate, date/time/UTC offset, magnitude and
//! size limits, site coordinates and names, PEC toggles, and the rest of
//! the `S*`/`T*` family not claimed by `tracking`.

use nom::bytes::complete::tag;
use nom::character::complete::{char, satisfy};
use nom::combinator::map;
use nom::sequence::preceded;

use super::common::{
    full_match, name_string, opt_space, signed_dm_pair, signed_dms_triple, signed_float_nn_n,
    time_triple, uint_n, unsigned_dm_pair,
};
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn hms_fields(h: i64, m: i64, s: i64) -> FieldMap {
    FieldMap::from([
        ("hours".to_string(), Field::Int(h)),
        ("minutes".to_string(), Field::Int(m)),
        ("seconds".to_string(), Field::Int(s)),
    ])
}

fn dms_fields(d: i64, m: i64, s: i64) -> FieldMap {
    FieldMap::from([
        ("degrees".to_string(), Field::Int(d)),
        ("minutes".to_string(), Field::Int(m)),
        ("seconds".to_string(), Field::Int(s)),
    ])
}

fn dm_fields(d: i64, m: i64) -> FieldMap {
    FieldMap::from([
        ("degrees".to_string(), Field::Int(d)),
        ("minutes".to_string(), Field::Int(m)),
    ])
}

fn parse_target_right_ascension(input: &str) -> Option<FieldMap> {
    let (h, m, s) = full_match(preceded(tag("Sr"), preceded(opt_space, time_triple)), input)?;
    Some(hms_fields(h, m, s))
}

fn parse_target_declination(input: &str) -> Option<FieldMap> {
    let (d, m, s) = full_match(
        preceded(tag("Sd"), preceded(opt_space, signed_dms_triple('*', ':'))),
        input,
    )?;
    Some(dms_fields(d, m, s))
}

fn parse_target_altitude(input: &str) -> Option<FieldMap> {
    let (d, m) = full_match(
        preceded(tag("SA"), preceded(opt_space, signed_dm_pair('*'))),
        input,
    )?;
    Some(dm_fields(d, m))
}

fn parse_target_azimuth(input: &str) -> Option<FieldMap> {
    let (d, m) = full_match(
        preceded(tag("Sz"), preceded(opt_space, unsigned_dm_pair('*'))),
        input,
    )?;
    Some(dm_fields(d, m))
}

fn parse_baud_rate(input: &str) -> Option<FieldMap> {
    let code = full_match(
        preceded(
            tag("SB"),
            map(satisfy(|c: char| c.is_ascii_digit()), |c| {
                c.to_digit(10).unwrap() as i64
            }),
        ),
        input,
    )?;
    Some(FieldMap::from([("code".to_string(), Field::Int(code))]))
}

fn parse_handbox_date(input: &str) -> Option<FieldMap> {
    let (month, day, year) = full_match(
        preceded(
            tag("SC"),
            nom::sequence::tuple((
                uint_n(2),
                preceded(char('/'), uint_n(2)),
                preceded(char('/'), uint_n(2)),
            )),
        ),
        input,
    )?;
    Some(FieldMap::from([
        ("month".to_string(), Field::Int(month)),
        ("day".to_string(), Field::Int(day)),
        ("year".to_string(), Field::Int(year)),
    ]))
}

fn parse_local_time(input: &str) -> Option<FieldMap> {
    let (h, m, s) = full_match(preceded(tag("SL"), time_triple), input)?;
    Some(hms_fields(h, m, s))
}

fn parse_local_sidereal_time(input: &str) -> Option<FieldMap> {
    let (h, m, s) = full_match(preceded(tag("SS"), time_triple), input)?;
    Some(hms_fields(h, m, s))
}

fn parse_utc_offset(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("SG"), signed_float_nn_n), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Float(value))]))
}

fn parse_field_diameter(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(
            tag("SF"),
            nom::character::complete::digit1::<&str, nom::error::Error<&str>>,
        ),
        input,
    )?;
    Some(FieldMap::from([(
        "value".to_string(),
        Field::Int(value.parse().unwrap_or(0)),
    )]))
}

fn parse_faint_magnitude(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("Sf"), signed_float_nn_n), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Float(value))]))
}

fn parse_brighter_limit(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("Sb"), signed_float_nn_n), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Float(value))]))
}

fn parse_site_longitude(input: &str) -> Option<FieldMap> {
    let (d, m) = full_match(preceded(tag("Sg"), unsigned_dm_pair('*')), input)?;
    Some(dm_fields(d, m))
}

fn parse_site_latitude(input: &str) -> Option<FieldMap> {
    let (d, m) = full_match(preceded(tag("St"), signed_dm_pair('*')), input)?;
    Some(dm_fields(d, m))
}

fn parse_dst_enabled(input: &str) -> Option<FieldMap> {
    let flag = full_match(
        preceded(
            tag("SH"),
            map(satisfy(|c| c == '0' || c == '1'), |c| c == '1'),
        ),
        input,
    )?;
    Some(FieldMap::from([("value".to_string(), Field::Bool(flag))]))
}

fn parse_maximum_elevation(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("Sh"), uint_n(2)), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Int(value))]))
}

fn parse_lowest_elevation(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("So"), uint_n(2)), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Int(value))]))
}

fn parse_smallest_object_size(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(
            tag("Sl"),
            nom::character::complete::digit1::<&str, nom::error::Error<&str>>,
        ),
        input,
    )?;
    Some(FieldMap::from([(
        "value".to_string(),
        Field::Int(value.parse().unwrap_or(0)),
    )]))
}

fn parse_largest_object_size(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(
            tag("Ss"),
            nom::character::complete::digit1::<&str, nom::error::Error<&str>>,
        ),
        input,
    )?;
    Some(FieldMap::from([(
        "value".to_string(),
        Field::Int(value.parse().unwrap_or(0)),
    )]))
}

fn site_name(mnemonic: &'static str, input: &str) -> Option<FieldMap> {
    let name = full_match(preceded(tag(mnemonic), name_string), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Str(name))]))
}

fn parse_site1_name(input: &str) -> Option<FieldMap> {
    site_name("SM", input)
}

fn parse_site2_name(input: &str) -> Option<FieldMap> {
    site_name("SN", input)
}

fn parse_site3_name(input: &str) -> Option<FieldMap> {
    site_name("SO", input)
}

fn parse_site4_name(input: &str) -> Option<FieldMap> {
    site_name("SP", input)
}

// Shares its store cell with the `Gy` getter; `Sy` parallels that mnemonic
// the same way `Sl`/`Gl` and `Ss`/`Gs` pair a setter with its getter.
fn parse_object_selection_string(input: &str) -> Option<FieldMap> {
    let letters = full_match(
        preceded(
            tag("Sy"),
            nom::bytes::complete::take_while(|c: char| c.is_ascii_alphabetic()),
        ),
        input,
    )?;
    Some(FieldMap::from([(
        "value".to_string(),
        Field::Str(letters.to_string()),
    )]))
}

fn parse_enable_flexure(input: &str) -> Option<FieldMap> {
    full_match(tag("Sw1"), input).map(|_| FieldMap::new())
}

fn parse_disable_flexure(input: &str) -> Option<FieldMap> {
    full_match(tag("Sw0"), input).map(|_| FieldMap::new())
}

fn parse_enable_ra_pec(input: &str) -> Option<FieldMap> {
    full_match(tag("ST+"), input).map(|_| FieldMap::new())
}

fn parse_disable_ra_pec(input: &str) -> Option<FieldMap> {
    full_match(tag("ST-"), input).map(|_| FieldMap::new())
}

fn parse_enable_alt_pec(input: &str) -> Option<FieldMap> {
    full_match(tag("STA+"), input).map(|_| FieldMap::new())
}

fn parse_disable_alt_pec(input: &str) -> Option<FieldMap> {
    full_match(tag("STA-"), input).map(|_| FieldMap::new())
}

fn parse_enable_az_pec(input: &str) -> Option<FieldMap> {
    full_match(tag("STZ+"), input).map(|_| FieldMap::new())
}

fn parse_disable_az_pec(input: &str) -> Option<FieldMap> {
    full_match(tag("STZ-"), input).map(|_| FieldMap::new())
}

fn value_enabled(_: &FieldMap) -> FieldMap {
    FieldMap::from([("enabled".to_string(), Field::Bool(true))])
}

fn value_disabled(_: &FieldMap) -> FieldMap {
    FieldMap::from([("enabled".to_string(), Field::Bool(false))])
}

fn parse_step_quality(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("SU"), uint_n(1)), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Int(value))]))
}

/// `find.minimum_quality` is a two-letter quality code (`"GD"`, `"EX"`,
/// ...), not a number; the digit `SU<n>` carries selects one step in that
/// scale rather than being stored verbatim.
fn value_quality_code(fields: &FieldMap) -> FieldMap {
    const CODES: [&str; 7] = ["SU", "EX", "VG", "GD", "FR", "PR", "VP"];
    let step = fields.get("value").map(Field::as_i64).unwrap_or(0);
    let code = CODES[step.rem_euclid(CODES.len() as i64) as usize];
    FieldMap::from([("value".to_string(), Field::Str(code.to_string()))])
}

fn parse_slew_rate_number(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("TR"), uint_n(1)), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Int(value))]))
}

// `SpB`/`SpH`/`SpS` mirror the `GpB`/`GpH`/`GpS` getters: a free-form
// numeric payload overwriting the combined backlash/home/sensor-offset
// store cell wholesale.
fn parse_backlash_values(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(
            tag("SpB"),
            nom::character::complete::digit1::<&str, nom::error::Error<&str>>,
        ),
        input,
    )?;
    Some(FieldMap::from([(
        "value".to_string(),
        Field::Int(value.parse().unwrap_or(0)),
    )]))
}

fn parse_home_data(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(
            tag("SpH"),
            nom::character::complete::digit1::<&str, nom::error::Error<&str>>,
        ),
        input,
    )?;
    Some(FieldMap::from([(
        "value".to_string(),
        Field::Int(value.parse().unwrap_or(0)),
    )]))
}

fn parse_sensor_offsets(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(
            tag("SpS"),
            nom::character::complete::digit1::<&str, nom::error::Error<&str>>,
        ),
        input,
    )?;
    Some(FieldMap::from([(
        "value".to_string(),
        Field::Int(value.parse().unwrap_or(0)),
    )]))
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::SetTargetRightAscension, parse_target_right_ascension)
            .store("mount.target.right_ascension"),
        CatalogEntry::new(CommandId::SetTargetDeclination, parse_target_declination)
            .store("mount.target.declination"),
        CatalogEntry::new(CommandId::SetTargetAltitude, parse_target_altitude)
            .store("mount.target.altitude"),
        CatalogEntry::new(CommandId::SetTargetAzimuth, parse_target_azimuth)
            .store("mount.target.azimuth"),
        CatalogEntry::new(CommandId::SetBaudRate, parse_baud_rate).store("site.baud_rate"),
        CatalogEntry::new(CommandId::SetHandboxDate, parse_handbox_date).store("site.date"),
        CatalogEntry::new(CommandId::SetLocalTime, parse_local_time).store("site.local_time"),
        CatalogEntry::new(CommandId::SetLocalSiderealTime, parse_local_sidereal_time)
            .store("site.sidereal_time"),
        CatalogEntry::new(CommandId::SetUTCOffset, parse_utc_offset).store("site.utc_offset"),
        CatalogEntry::new(CommandId::SetFieldDiameter, parse_field_diameter)
            .store("find.field_diameter"),
        CatalogEntry::new(CommandId::SetFaintMagnitude, parse_faint_magnitude)
            .store("find.faint_magnitude_limit"),
        CatalogEntry::new(CommandId::SetBrighterLimit, parse_brighter_limit)
            .store("find.brighter_magnitude_limit"),
        CatalogEntry::new(CommandId::SetSiteLongitude, parse_site_longitude)
            .store("site.longitude"),
        CatalogEntry::new(CommandId::SetSiteLatitude, parse_site_latitude)
            .store("site.latitude"),
        CatalogEntry::new(CommandId::SetDSTEnabled, parse_dst_enabled).store("site.dst_enabled"),
        CatalogEntry::new(CommandId::SetMaximumElevation, parse_maximum_elevation)
            .store("mount.limits.high"),
        CatalogEntry::new(CommandId::SetLowestElevation, parse_lowest_elevation)
            .store("mount.limits.low"),
        // `Sl`/`Ss` preserve the reference source's own (reversed-from-
        // some-manuals) smallest/largest convention; see DESIGN.md.
        CatalogEntry::new(CommandId::SetSmallestObjectSize, parse_smallest_object_size)
            .store("find.smallest_object_size"),
        CatalogEntry::new(CommandId::SetLargestObjectSize, parse_largest_object_size)
            .store("find.largest_object_size"),
        CatalogEntry::new(CommandId::SetSite1Name, parse_site1_name).store("site.names.site_1"),
        CatalogEntry::new(CommandId::SetSite2Name, parse_site2_name).store("site.names.site_2"),
        CatalogEntry::new(CommandId::SetSite3Name, parse_site3_name).store("site.names.site_3"),
        CatalogEntry::new(CommandId::SetSite4Name, parse_site4_name).store("site.names.site_4"),
        CatalogEntry::new(
            CommandId::SetObjectSelectionString,
            parse_object_selection_string,
        )
        .store("find.object_selection_string"),
        CatalogEntry::new(CommandId::EnableFlexureCorrection, parse_enable_flexure)
            .store("mount.flexure_correction")
            .value(value_enabled),
        CatalogEntry::new(CommandId::DisableFlexureCorrection, parse_disable_flexure)
            .store("mount.flexure_correction")
            .value(value_disabled),
        CatalogEntry::new(CommandId::EnableRightAscensionPEC, parse_enable_ra_pec)
            .store("mount.pec.right_ascension")
            .value(value_enabled),
        CatalogEntry::new(CommandId::DisableRightAscensionPEC, parse_disable_ra_pec)
            .store("mount.pec.right_ascension")
            .value(value_disabled),
        CatalogEntry::new(CommandId::EnableAltitudePEC, parse_enable_alt_pec)
            .store("mount.pec.altitude")
            .value(value_enabled),
        CatalogEntry::new(CommandId::DisableAltitudePEC, parse_disable_alt_pec)
            .store("mount.pec.altitude")
            .value(value_disabled),
        CatalogEntry::new(CommandId::EnableAzimuthPEC, parse_enable_az_pec)
            .store("mount.pec.azimuth")
            .value(value_enabled),
        CatalogEntry::new(CommandId::DisableAzimuthPEC, parse_disable_az_pec)
            .store("mount.pec.azimuth")
            .value(value_disabled),
        CatalogEntry::new(CommandId::StepQualityLimit, parse_step_quality)
            .store("find.minimum_quality")
            .value(value_quality_code),
        CatalogEntry::new(CommandId::SetSlewRateNumber, parse_slew_rate_number)
            .store("mount.slew_rate_number"),
        CatalogEntry::new(CommandId::SetBacklashValues, parse_backlash_values)
            .store("mount.backlash.combined"),
        CatalogEntry::new(CommandId::SetHomeData, parse_home_data).store("mount.home_data"),
        CatalogEntry::new(CommandId::SetSensorOffsets, parse_sensor_offsets)
            .store("mount.sensor_offsets"),
    ]
}
