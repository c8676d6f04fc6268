//! Degrees-minutes-seconds rendering of decimal coordinates

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Which axis a coordinate value lies on.
///
/// The axis selects the hemisphere letter pair: latitude renders
/// N (>= 0) / S (< 0), longitude renders E (>= 0) / W (< 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Lat,
    Lon,
}

impl Axis {
    /// Hemisphere letter for a value on this axis.
    fn hemisphere(self, value: Decimal) -> char {
        match (self, value < Decimal::ZERO) {
            (Axis::Lat, false) => 'N',
            (Axis::Lat, true) => 'S',
            (Axis::Lon, false) => 'E',
            (Axis::Lon, true) => 'W',
        }
    }
}

const SIXTY: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Format a signed decimal coordinate as a DMS string, e.g. `34°4'48"S`.
///
/// Seconds are rounded to the nearest integer with a half-away-from-zero
/// tie-break. Degrees, minutes and seconds are printed without padding.
///
/// Note that seconds which round up to 60 are rendered as `60` rather
/// than carried into the minutes field. Tests pin this; callers that
/// need normalized output have to carry the overflow themselves.
pub fn format_dms(value: Decimal, axis: Axis) -> String {
    let abs = value.abs();
    let degrees = abs.trunc();
    let minutes_float = (abs - degrees) * SIXTY;
    let minutes = minutes_float.trunc();
    let seconds = ((minutes_float - minutes) * SIXTY)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    // trunc/round always yield integral decimals well inside i64 range
    let d = degrees.to_i64().unwrap_or(0);
    let m = minutes.to_i64().unwrap_or(0);
    let s = seconds.to_i64().unwrap_or(0);

    format!("{}°{}'{}\"{}", d, m, s, axis.hemisphere(value))
}

/// Format a latitude/longitude pair, or `None` when either is absent.
///
/// A profile with only one coordinate is not locatable, so a partial
/// pair never renders a position string.
pub fn format_position(lat: Option<Decimal>, lon: Option<Decimal>) -> Option<String> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Some(format!(
            "{} {}",
            format_dms(lat, Axis::Lat),
            format_dms(lon, Axis::Lon)
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_southern_latitude() {
        assert_eq!(format_dms(dec!(-34.08), Axis::Lat), "34°4'48\"S");
    }

    #[test]
    fn formats_eastern_longitude() {
        assert_eq!(format_dms(dec!(18.86), Axis::Lon), "18°51'36\"E");
    }

    #[test]
    fn formats_northern_and_western_hemispheres() {
        assert_eq!(format_dms(dec!(51.477928), Axis::Lat), "51°28'41\"N");
        assert_eq!(format_dms(dec!(-0.001545), Axis::Lon), "0°0'6\"W");
    }

    #[test]
    fn zero_is_north_and_east() {
        assert_eq!(format_dms(dec!(0), Axis::Lat), "0°0'0\"N");
        assert_eq!(format_dms(dec!(0), Axis::Lon), "0°0'0\"E");
    }

    #[test]
    fn seconds_ties_round_away_from_zero() {
        // 0.001250 deg is exactly 4.5 seconds
        assert_eq!(format_dms(dec!(0.001250), Axis::Lat), "0°0'5\"N");
        assert_eq!(format_dms(dec!(-0.001250), Axis::Lat), "0°0'5\"S");
    }

    #[test]
    fn seconds_round_to_sixty_do_not_carry() {
        // 0.999999 deg = 59' 59.9964" which rounds to 60" and stays there
        assert_eq!(format_dms(dec!(0.999999), Axis::Lat), "0°59'60\"N");
    }

    #[test]
    fn position_requires_both_coordinates() {
        assert_eq!(
            format_position(Some(dec!(-34.08)), Some(dec!(18.86))).as_deref(),
            Some("34°4'48\"S 18°51'36\"E")
        );
        assert_eq!(format_position(None, Some(dec!(18.86))), None);
        assert_eq!(format_position(Some(dec!(-34.08)), None), None);
        assert_eq!(format_position(None, None), None);
    }

    proptest! {
        #[test]
        fn dms_is_pure(micro in -90_000_000i64..=90_000_000i64) {
            let value = Decimal::new(micro, 6);
            let first = format_dms(value, Axis::Lat);
            let second = format_dms(value, Axis::Lat);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn dms_shape_and_hemisphere(micro in -180_000_000i64..=180_000_000i64) {
            let value = Decimal::new(micro, 6);
            let rendered = format_dms(value, Axis::Lon);
            let hemisphere = rendered.chars().last();
            if micro < 0 {
                prop_assert_eq!(hemisphere, Some('W'));
            } else {
                prop_assert_eq!(hemisphere, Some('E'));
            }
            prop_assert!(rendered.contains('°'));
            prop_assert!(rendered.contains('\''));
            prop_assert!(rendered.contains('"'));
        }
    }
}
