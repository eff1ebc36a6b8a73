//! [HTTP date][rfc] formatting, parsing and the per thread date cache.
//!
//! [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#section-5.6.7>
use std::cell::RefCell;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Length of an IMF-fixdate, e.g: `Sun, 06 Nov 1994 08:49:37 GMT`.
pub const DATE_LEN: usize = 29;

/// Maximum age of the cached date string.
pub const DATE_REFRESH: Duration = Duration::from_secs(1);

const DAY_NAMES: [&[u8; 3]; 7] = [b"Thu", b"Fri", b"Sat", b"Sun", b"Mon", b"Tue", b"Wed"];
const MONTH_NAMES: [&[u8; 3]; 12] = [
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun",
    b"Jul", b"Aug", b"Sep", b"Oct", b"Nov", b"Dec",
];

// year 10000
const MAX_SECS: u64 = 253_402_300_800;

/// Create [httpdate][rfc] for current time.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#section-5.6.7>
#[inline]
pub fn httpdate_now() -> [u8; DATE_LEN] {
    httpdate(SystemTime::now())
}

/// Create [httpdate][rfc] with given time.
///
/// Time before the unix epoch is formatted as the epoch, time past year 9999 is clamped to the
/// last second of 9999.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#section-5.6.7>
pub fn httpdate(time: SystemTime) -> [u8; DATE_LEN] {
    let secs = time
        .duration_since(UNIX_EPOCH)
        .map_or(0, |dur| dur.as_secs())
        .min(MAX_SECS - 1);

    let days = secs / 86400;
    let secs_of_day = secs % 86400;
    let (year, month, day) = civil_from_days(days);

    let mut buf: [u8; DATE_LEN] = *b"ddd, 00 mmm 0000 00:00:00 GMT";

    buf[..3].copy_from_slice(DAY_NAMES[(days % 7) as usize]);
    put_2digit(&mut buf[5..7], day);
    buf[8..11].copy_from_slice(MONTH_NAMES[month as usize - 1]);
    put_2digit(&mut buf[12..14], (year / 100) as u32);
    put_2digit(&mut buf[14..16], (year % 100) as u32);
    put_2digit(&mut buf[17..19], (secs_of_day / 3600) as u32);
    put_2digit(&mut buf[20..22], (secs_of_day % 3600 / 60) as u32);
    put_2digit(&mut buf[23..25], (secs_of_day % 60) as u32);

    buf
}

/// Parse an IMF-fixdate, e.g: `Sun, 06 Nov 1994 08:49:37 GMT`.
///
/// The day name is not validated against the date. Returns `None` for any other format.
pub fn parse_httpdate(src: &[u8]) -> Option<SystemTime> {
    let src: &[u8; DATE_LEN] = src.try_into().ok()?;

    if !DAY_NAMES.iter().any(|name| &src[..3] == *name)
        || &src[3..5] != b", "
        || src[7] != b' '
        || src[11] != b' '
        || src[16] != b' '
        || src[19] != b':'
        || src[22] != b':'
        || &src[25..] != b" GMT"
    {
        return None;
    }

    let day = get_2digit(&src[5..7])?;
    let month = MONTH_NAMES.iter().position(|name| &src[8..11] == *name)? as u32 + 1;
    let year = get_2digit(&src[12..14])? * 100 + get_2digit(&src[14..16])?;
    let hour = get_2digit(&src[17..19])?;
    let min = get_2digit(&src[20..22])?;
    let sec = get_2digit(&src[23..25])?;

    if year < 1970 || !(1..=days_in_month(year, month)).contains(&day) || hour > 23 || min > 59 || sec > 60 {
        return None;
    }

    let days = days_from_civil(year, month, day);
    let secs = days * 86400 + u64::from(hour * 3600 + min * 60 + sec);
    Some(UNIX_EPOCH + Duration::from_secs(secs))
}

fn put_2digit(dst: &mut [u8], value: u32) {
    dst[0] = b'0' + (value / 10 % 10) as u8;
    dst[1] = b'0' + (value % 10) as u8;
}

fn get_2digit(src: &[u8]) -> Option<u32> {
    match src {
        [a @ b'0'..=b'9', b @ b'0'..=b'9'] => Some(u32::from(a - b'0') * 10 + u32::from(b - b'0')),
        _ => None,
    }
}

const fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// http://howardhinnant.github.io/date_algorithms.html, restricted to dates after the epoch

/// Returns `(year, month, day)` for days since the unix epoch.
const fn civil_from_days(days: u64) -> (u64, u32, u32) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + (month <= 2) as u64;
    (year, month, day)
}

const fn days_from_civil(year: u32, month: u32, day: u32) -> u64 {
    let year = (if month <= 2 { year - 1 } else { year }) as u64;
    let era = year / 400;
    let yoe = year - era * 400;
    let mp = (if month > 2 { month - 3 } else { month + 9 }) as u64;
    let doy = (153 * mp + 2) / 5 + day as u64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

// ===== Cache =====

/// Per thread cached date string.
///
/// The string is only recomputed when it is older than [`DATE_REFRESH`], trading sub-second
/// precision for a clock read per header.
#[derive(Debug)]
pub struct DateCache {
    date: [u8; DATE_LEN],
    updated_at: Option<SystemTime>,
}

thread_local! {
    static DATE: RefCell<DateCache> = const { RefCell::new(DateCache::new()) };
}

impl DateCache {
    const fn new() -> Self {
        Self {
            date: *b"Thu, 01 Jan 1970 00:00:00 GMT",
            updated_at: None,
        }
    }

    /// Refresh the cached string if it is stale relative to `now`.
    pub fn inexact_update(&mut self, now: SystemTime) {
        let fresh = self
            .updated_at
            .and_then(|at| now.duration_since(at).ok())
            .is_some_and(|age| age < DATE_REFRESH);
        if !fresh {
            self.date = httpdate(now);
            self.updated_at = Some(now);
        }
    }

    /// Returns the cached date string.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; DATE_LEN] {
        &self.date
    }
}

/// Refresh the current thread's date cache and call `f` with the date string.
pub fn with_date<R>(f: impl FnOnce(&[u8]) -> R) -> R {
    DATE.with_borrow_mut(|cache| {
        cache.inexact_update(SystemTime::now());
        f(cache.as_bytes())
    })
}
