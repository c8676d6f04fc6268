//! Coordinate formatting for Pin People
//!
//! This crate holds the pure coordinate logic shared by the HTTP layer:
//! converting signed decimal latitudes/longitudes into human-readable
//! degrees-minutes-seconds strings with a hemisphere letter.
//!
//! Coordinates are fixed-point decimals with six fractional digits
//! (`NUMERIC(9,6)` in the database), so all arithmetic here is exact.
//!
//! # Example
//!
//! ```rust
//! use geo_coords::{format_dms, format_position, Axis};
//! use rust_decimal::Decimal;
//!
//! let lat: Decimal = "-34.08".parse().unwrap();
//! let lon: Decimal = "18.86".parse().unwrap();
//!
//! assert_eq!(format_dms(lat, Axis::Lat), "34°4'48\"S");
//! assert_eq!(
//!     format_position(Some(lat), Some(lon)).as_deref(),
//!     Some("34°4'48\"S 18°51'36\"E")
//! );
//! ```

pub mod dms;

pub use dms::*;
