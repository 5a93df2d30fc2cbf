//! Conversion from UTC fields into a zone's local fields.

use tracing::debug;

use crate::error::DateTimeError;
use crate::instant::Instant;

/// Converts an instant whose fields read as UTC into the local fields of
/// its attached zone.
///
/// The standard offset is applied first, then the zone's DST offset is
/// re-queried at the shifted instant and applied if nonzero. This bounded
/// two-step correction is exact for zones whose standard offset never
/// varies and whose DST offset takes at most two values; zones outside
/// that shape get an approximation, not an error.
///
/// # Errors
///
/// Returns [`DateTimeError::RequiresAware`] when `utc` carries no zone,
/// [`DateTimeError::MissingOffset`] when the zone cannot resolve both
/// offsets for `utc`, and [`DateTimeError::InconsistentZone`] when the
/// DST offset becomes unresolvable after the standard shift.
pub fn from_utc(utc: &Instant) -> Result<Instant, DateTimeError> {
    if utc.zone().is_none() {
        return Err(DateTimeError::RequiresAware);
    }
    let offset = utc.utc_offset()?.ok_or(DateTimeError::MissingOffset)?;
    let mut dst = utc.dst()?.ok_or(DateTimeError::MissingOffset)?;
    let std = offset.checked_sub(dst)?;

    let mut local = utc.clone();
    if !std.is_zero() {
        local = local.checked_add(std)?;
        debug!(shift = %std, "applied standard offset");
        dst = local.dst()?.ok_or(DateTimeError::InconsistentZone)?;
    }
    if !dst.is_zero() {
        local = local.checked_add(dst)?;
        debug!(shift = %dst, "applied dst offset");
    }
    Ok(local)
}
