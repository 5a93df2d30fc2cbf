//! Fixed-width packed byte layouts for dates, times and instants.
//!
//! Big-endian, field-per-byte except the two-byte year and three-byte
//! microsecond. Zone references are not encoded; decoding always yields
//! naive values. Every decode re-validates, so hostile bytes fail with
//! the same errors as hostile constructor arguments.

use crate::date::Date;
use crate::error::DateTimeError;
use crate::instant::Instant;
use crate::time::Time;

impl Date {
    /// Packs into 4 bytes: `year_hi, year_lo, month, day`.
    pub fn to_packed(self) -> [u8; 4] {
        let year = self.year() as u16;
        [(year >> 8) as u8, (year & 0xff) as u8, self.month(), self.day()]
    }

    /// Unpacks a 4-byte layout, re-validating every field.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`](horae_calendar::CalendarError) for any
    /// field an in-range date could not have produced.
    pub fn from_packed(bytes: [u8; 4]) -> Result<Self, DateTimeError> {
        let year = (u16::from(bytes[0]) << 8) | u16::from(bytes[1]);
        Date::new(i64::from(year), bytes[2], bytes[3])
    }
}

impl Time {
    /// Packs into 6 bytes: `hour, minute, second, us_hi, us_mid, us_lo`.
    ///
    /// The zone reference, if any, is dropped.
    pub fn to_packed(&self) -> [u8; 6] {
        let us = self.microsecond();
        [
            self.hour(),
            self.minute(),
            self.second(),
            (us >> 16) as u8,
            (us >> 8) as u8,
            (us & 0xff) as u8,
        ]
    }

    /// Unpacks a 6-byte layout into a naive time, re-validating every
    /// field.
    ///
    /// # Errors
    ///
    /// Returns a clock-field error for any byte an in-range time could
    /// not have produced.
    pub fn from_packed(bytes: [u8; 6]) -> Result<Self, DateTimeError> {
        let us = (u32::from(bytes[3]) << 16) | (u32::from(bytes[4]) << 8) | u32::from(bytes[5]);
        Time::new(bytes[0], bytes[1], bytes[2], us)
    }
}

impl Instant {
    /// Packs into 10 bytes: the date layout followed by the time layout.
    ///
    /// The zone reference, if any, is dropped.
    pub fn to_packed(&self) -> [u8; 10] {
        let mut out = [0u8; 10];
        out[..4].copy_from_slice(&self.date().to_packed());
        out[4..].copy_from_slice(&self.timetz().to_packed());
        out
    }

    /// Unpacks a 10-byte layout into a naive instant, re-validating every
    /// field.
    ///
    /// # Errors
    ///
    /// Returns the relevant field error for any byte an in-range instant
    /// could not have produced.
    pub fn from_packed(bytes: [u8; 10]) -> Result<Self, DateTimeError> {
        let mut date_bytes = [0u8; 4];
        date_bytes.copy_from_slice(&bytes[..4]);
        let mut time_bytes = [0u8; 6];
        time_bytes.copy_from_slice(&bytes[4..]);
        let date = Date::from_packed(date_bytes)?;
        let time = Time::from_packed(time_bytes)?;
        Ok(Instant::combine(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::utc;
    use horae_calendar::CalendarError;

    #[test]
    fn date_layout_is_big_endian() {
        let date = Date::new(2024, 3, 15).unwrap();
        // 2024 = 0x07e8
        assert_eq!(date.to_packed(), [0x07, 0xe8, 3, 15]);
        assert_eq!(Date::MIN.to_packed(), [0, 1, 1, 1]);
        assert_eq!(Date::MAX.to_packed(), [0x27, 0x0f, 12, 31]);
    }

    #[test]
    fn date_roundtrip() {
        for date in [Date::MIN, Date::MAX, Date::new(1970, 1, 1).unwrap()] {
            assert_eq!(Date::from_packed(date.to_packed()).unwrap(), date);
        }
    }

    #[test]
    fn date_decode_revalidates() {
        assert_eq!(
            Date::from_packed([0, 0, 1, 1]).unwrap_err(),
            CalendarError::InvalidYear { year: 0 }.into()
        );
        assert_eq!(
            Date::from_packed([0x07, 0xe8, 2, 30]).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                max_day: 29,
            }
            .into()
        );
        assert!(Date::from_packed([0x07, 0xe8, 13, 1]).is_err());
    }

    #[test]
    fn time_layout_splits_microseconds() {
        let time = Time::new(23, 59, 59, 999_999).unwrap();
        // 999999 = 0x0f423f
        assert_eq!(time.to_packed(), [23, 59, 59, 0x0f, 0x42, 0x3f]);
    }

    #[test]
    fn time_roundtrip_drops_zone() {
        let aware = Time::new(12, 30, 45, 123_456).unwrap().with_zone(utc());
        let decoded = Time::from_packed(aware.to_packed()).unwrap();
        assert!(!decoded.is_aware());
        assert_eq!(decoded, aware.without_zone());
    }

    #[test]
    fn time_decode_revalidates() {
        assert_eq!(
            Time::from_packed([24, 0, 0, 0, 0, 0]).unwrap_err(),
            DateTimeError::InvalidHour { hour: 24 }
        );
        // 0x0f4240 = 1000000
        assert_eq!(
            Time::from_packed([0, 0, 0, 0x0f, 0x42, 0x40]).unwrap_err(),
            DateTimeError::InvalidMicrosecond {
                microsecond: 1_000_000
            }
        );
    }

    #[test]
    fn instant_roundtrip_drops_zone() {
        let aware =
            Instant::new(2024, 6, 15, 10, 30, 15, 250_000, Some(utc())).unwrap();
        let bytes = aware.to_packed();
        assert_eq!(&bytes[..4], &aware.date().to_packed());
        let decoded = Instant::from_packed(bytes).unwrap();
        assert!(!decoded.is_aware());
        assert_eq!(decoded, aware.without_zone());
    }

    #[test]
    fn instant_decode_revalidates_both_halves() {
        let good = Instant::new(2024, 6, 15, 10, 30, 15, 0, None).unwrap();
        let mut bytes = good.to_packed();
        bytes[2] = 13;
        assert!(Instant::from_packed(bytes).is_err());
        let mut bytes = good.to_packed();
        bytes[5] = 61;
        assert!(Instant::from_packed(bytes).is_err());
    }

    #[test]
    fn extreme_values_roundtrip() {
        assert_eq!(
            Instant::from_packed(Instant::MIN.to_packed()).unwrap(),
            Instant::MIN
        );
        assert_eq!(
            Instant::from_packed(Instant::MAX.to_packed()).unwrap(),
            Instant::MAX
        );
    }
}
