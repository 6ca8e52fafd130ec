//! Commit stamp token.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Read};

/// Number of bytes a stamp occupies at the start of a sentinel file.
pub const STAMP_LEN: usize = 20;

/// Digits kept after the decimal point.
const FRACTION_DIGITS: usize = 8;

/// Opaque commit marker stored in the first [`STAMP_LEN`] bytes of a sentinel.
///
/// Written as `<whole-seconds><fractional-seconds>`, for example
/// `17000000000.12345678`: ten digits of Unix seconds followed by the
/// fraction rendered as `0.dddddddd`. Ordering is lexicographic on the raw
/// bytes, which matches chronological order only while every compared stamp
/// has the same width. Sentinel content is kept byte for byte, so stamps that
/// are not valid UTF-8 still compare by their bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stamp(Vec<u8>);

impl Stamp {
    /// Stamp for the current wall-clock time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(time: DateTime<Utc>) -> Self {
        let fraction = time.timestamp_subsec_nanos() / 10;
        let text = format!(
            "{}0.{:0width$}",
            time.timestamp(),
            fraction,
            width = FRACTION_DIGITS
        );
        Stamp(text.into_bytes())
    }

    /// Read up to [`STAMP_LEN`] bytes from `reader`.
    ///
    /// Short or empty content yields a short or empty stamp.
    pub fn read_from<R: Read>(reader: R) -> io::Result<Self> {
        let mut raw = Vec::with_capacity(STAMP_LEN);
        reader.take(STAMP_LEN as u64).read_to_end(&mut raw)?;
        Ok(Stamp(raw))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Text form with invalid UTF-8 replaced.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wall-clock time encoded in the stamp, if it is well formed.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let text = std::str::from_utf8(&self.0).ok()?;
        let (whole, fraction) = text.split_once('.')?;
        let secs = whole.strip_suffix('0')?.parse::<i64>().ok()?;
        let digits_ok = !fraction.is_empty()
            && fraction.len() <= 9
            && fraction.bytes().all(|b| b.is_ascii_digit());
        if !digits_ok {
            return None;
        }
        let nanos = format!("{:0<9}", fraction).parse::<u32>().ok()?;
        DateTime::from_timestamp(secs, nanos)
    }
}

impl From<&str> for Stamp {
    fn from(raw: &str) -> Self {
        Stamp(raw.as_bytes().to_vec())
    }
}

impl From<String> for Stamp {
    fn from(raw: String) -> Self {
        Stamp(raw.into_bytes())
    }
}

impl From<&[u8]> for Stamp {
    fn from(raw: &[u8]) -> Self {
        Stamp(raw.to_vec())
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Serialized as its lossy text form.
impl Serialize for Stamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
