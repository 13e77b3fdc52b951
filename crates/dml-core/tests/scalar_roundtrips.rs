//! # Scalar Round-Trip Properties
//!
//! Property tests for the conversion laws that hold across the whole
//! input space of each carrier: byte/hex round-trips for identifiers,
//! whole-second round-trips for timestamps, and literal passthrough for
//! decimals.

use bigdecimal::BigDecimal;
use chrono::DateTime;
use dml_core::{Decimal, Guid, Timestamp};
use proptest::prelude::*;
use std::str::FromStr;

proptest! {
    #[test]
    fn guid_byte_roundtrip(bytes in any::<[u8; 16]>()) {
        let g = Guid::from_bytes(&bytes).unwrap();
        prop_assert_eq!(g.as_bytes(), &bytes);
        let u = g.to_uuid();
        prop_assert_eq!(u.as_bytes(), &bytes);
    }

    #[test]
    fn guid_hex_roundtrip(bytes in any::<[u8; 16]>()) {
        let g = Guid::from_bytes(&bytes).unwrap();
        let hex = g.to_hex();
        prop_assert_eq!(hex.len(), 32);
        prop_assert_eq!(Guid::parse_hex(&hex).unwrap(), g);
    }

    #[test]
    fn guid_wrong_length_rejected(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(bytes.len() != 16);
        prop_assert!(Guid::from_bytes(&bytes).is_err());
    }

    #[test]
    fn timestamp_whole_second_roundtrip(secs in -8_000_000_000i64..8_000_000_000) {
        let dt = DateTime::from_timestamp(secs, 0).unwrap();
        let ts = Timestamp::from_datetime(&dt);
        prop_assert_eq!(ts.milliseconds(), secs * 1000);
        prop_assert_eq!(ts.to_datetime().unwrap(), dt);
    }

    #[test]
    fn timestamp_subseconds_discarded(secs in -8_000_000_000i64..8_000_000_000, nanos in 0u32..1_000_000_000) {
        let dt = DateTime::from_timestamp(secs, nanos).unwrap();
        let ts = Timestamp::from_datetime(&dt);
        prop_assert_eq!(ts.milliseconds() % 1000, 0);
        prop_assert_eq!(ts.to_datetime().unwrap().timestamp(), secs);
    }

    #[test]
    fn decimal_literal_passthrough(s in "[+-]?[0-9]{1,18}(\\.[0-9]{1,9})?") {
        let d = Decimal::parse(&s).unwrap();
        prop_assert_eq!(d.as_str(), s.as_str());

        // The grammar-validated literal is always acceptable to the
        // native parser, and the native canonical form re-parses to an
        // equal numeric value.
        let native = d.to_bigdecimal().unwrap();
        let back = Decimal::from_bigdecimal(&native);
        prop_assert_eq!(back.to_bigdecimal().unwrap(), native.clone());
        prop_assert_eq!(native, BigDecimal::from_str(&s).unwrap());
    }
}
