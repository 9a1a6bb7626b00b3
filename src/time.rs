//! Timestamp encodings used by the Twitter API.
//!
//! Rate-limit resets arrive as integer seconds since the Unix epoch
//! ([`EpochTime`]), while `created_at` style fields use Ruby's date layout
//! ([`Time`], e.g. `Mon Nov 29 21:18:15 +0000 2010`). Both encode `None` as
//! `null` when wrapped in an `Option`.

use crate::errors::TimeError;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// chrono layout equivalent to Ruby's `Time#to_s` / Go's `time.RubyDate`.
pub const RUBY_DATE: &str = "%a %b %d %H:%M:%S %z %Y";

// Same layout with a space-padded day, accepted on input only.
const RUBY_DATE_SPACE_PADDED: &str = "%a %b %e %H:%M:%S %z %Y";

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whole seconds since 1970-01-01T00:00:00Z.
///
/// The seconds count is kept as-is so every `i64` survives a decode/encode
/// cycle, even ones chrono cannot represent as a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochTime(i64);

impl EpochTime {
    pub const fn from_timestamp(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn timestamp(self) -> i64 {
        self.0
    }

    /// Calendar view of the instant; `None` when outside chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.0, 0)
    }

    /// Decodes a JSON value, rejecting anything that is not an integer.
    pub fn from_json(value: &Value) -> Result<Self, TimeError> {
        match value {
            Value::Number(n) => n.as_i64().map(Self).ok_or(TimeError::TypeMismatch {
                expected: "integer",
                found: "non-integer number",
            }),
            other => Err(TimeError::TypeMismatch {
                expected: "integer",
                found: json_kind(other),
            }),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for EpochTime {
    fn from(t: DateTime<Tz>) -> Self {
        Self(t.timestamp())
    }
}

impl fmt::Display for EpochTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{dt}"),
            None => write!(f, "{} seconds since epoch", self.0),
        }
    }
}

impl Serialize for EpochTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

struct EpochVisitor;

impl<'de> Visitor<'de> for EpochVisitor {
    type Value = EpochTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer count of seconds since the Unix epoch")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<EpochTime, E> {
        Ok(EpochTime(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<EpochTime, E> {
        i64::try_from(v)
            .map(EpochTime)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }
}

impl<'de> Deserialize<'de> for EpochTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i64(EpochVisitor)
    }
}

/// An instant rendered in Ruby's date layout. The UTC offset it was decoded
/// with is kept and written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time(DateTime<FixedOffset>);

impl Time {
    pub fn new(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }

    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let dt = DateTime::parse_from_str(s, RUBY_DATE).map_err(|source| TimeError::Parse {
            input: s.to_string(),
            source: Some(source),
        })?;
        // chrono's %z and %Y also take `+00:00` and short years; only the
        // fixed-width forms are valid, so the input must re-format to itself.
        if dt.format(RUBY_DATE).to_string() != s
            && dt.format(RUBY_DATE_SPACE_PADDED).to_string() != s
        {
            return Err(TimeError::Parse {
                input: s.to_string(),
                source: None,
            });
        }
        Ok(Self(dt))
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Decodes a JSON value; non-strings fail before any parsing is attempted.
    pub fn from_json(value: &Value) -> Result<Self, TimeError> {
        match value {
            Value::String(s) => Self::parse(s),
            other => Err(TimeError::TypeMismatch {
                expected: "string",
                found: json_kind(other),
            }),
        }
    }
}

impl From<DateTime<FixedOffset>> for Time {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }
}

impl From<Time> for DateTime<FixedOffset> {
    fn from(t: Time) -> Self {
        t.0
    }
}

impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RUBY_DATE))
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct RubyDateVisitor;

impl<'de> Visitor<'de> for RubyDateVisitor {
    type Value = Time;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date string like \"Mon Nov 29 21:18:15 +0000 2010\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Time, E> {
        Time::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(RubyDateVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn epoch_encodes_as_bare_integer() {
        let t = EpochTime::from_timestamp(1403602426);
        assert_eq!(serde_json::to_string(&t).unwrap(), "1403602426");
    }

    #[test]
    fn epoch_absent_encodes_as_null() {
        let t: Option<EpochTime> = None;
        assert_eq!(serde_json::to_string(&t).unwrap(), "null");
    }

    #[test]
    fn epoch_roundtrips_extremes() {
        for n in [i64::MIN, -1, 0, 1, 1403602426, i64::MAX] {
            let s = n.to_string();
            let t: EpochTime = serde_json::from_str(&s).unwrap();
            assert_eq!(t.timestamp(), n);
            assert_eq!(serde_json::to_string(&t).unwrap(), s);
        }
        assert!(EpochTime::from_timestamp(i64::MAX).to_datetime().is_none());
    }

    #[test]
    fn epoch_rejects_strings_and_floats() {
        let err = serde_json::from_str::<EpochTime>(r#""xasdasa""#).unwrap_err();
        assert!(err.to_string().contains("invalid type: string"), "{err}");
        assert!(serde_json::from_str::<EpochTime>("1.5").is_err());
        assert!(serde_json::from_str::<EpochTime>(&u64::MAX.to_string()).is_err());
    }

    #[test]
    fn epoch_from_json_reports_type_mismatch() {
        let err = EpochTime::from_json(&json!("xasdasa")).unwrap_err();
        assert!(matches!(
            err,
            TimeError::TypeMismatch {
                expected: "integer",
                found: "string"
            }
        ));
        assert!(matches!(
            EpochTime::from_json(&json!(2.5)),
            Err(TimeError::TypeMismatch { .. })
        ));
        assert_eq!(
            EpochTime::from_json(&json!(1000)).unwrap(),
            EpochTime::from_timestamp(1000)
        );
    }

    #[test]
    fn epoch_drops_subsecond_precision() {
        let dt = DateTime::<Utc>::from_timestamp(1000, 999_000_000).unwrap();
        assert_eq!(EpochTime::from(dt).timestamp(), 1000);
    }

    #[test]
    fn epoch_display_is_utc() {
        let t = EpochTime::from_timestamp(0);
        assert_eq!(t.to_string(), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn ruby_date_roundtrip_is_exact() {
        let raw = r#""Mon Nov 29 21:18:15 +0000 2010""#;
        let t: Time = serde_json::from_str(raw).unwrap();
        assert_eq!(t.as_datetime().timestamp(), 1291065495);
        assert_eq!(serde_json::to_string(&t).unwrap(), raw);
    }

    #[test]
    fn ruby_date_keeps_offset() {
        let raw = "Fri Jan 01 12:00:00 +0530 2016";
        let t = Time::parse(raw).unwrap();
        assert_eq!(t.as_datetime().offset().local_minus_utc(), 5 * 3600 + 30 * 60);
        assert_eq!(t.to_string(), raw);
    }

    #[test]
    fn ruby_date_formats_with_attached_offset() {
        let cst = FixedOffset::west_opt(6 * 3600).unwrap();
        let dt = DateTime::<Utc>::from_timestamp(1000, 0)
            .unwrap()
            .with_timezone(&cst);
        let t = Time::new(dt);
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#""Wed Dec 31 18:16:40 -0600 1969""#
        );
    }

    #[test]
    fn ruby_date_absent_encodes_as_null() {
        let t: Option<Time> = None;
        assert_eq!(serde_json::to_string(&t).unwrap(), "null");
    }

    #[test]
    fn ruby_date_rejects_garbage() {
        let err = serde_json::from_str::<Time>(r#""asdfasdfasdf23423""#).unwrap_err();
        assert!(err.to_string().contains("cannot parse"), "{err}");
        assert!(matches!(
            Time::parse("asdfasdfasdf23423"),
            Err(TimeError::Parse { .. })
        ));
        assert!("Tue Nov 29 21:18:15 +0000 2010".parse::<Time>().is_err());
    }

    #[test]
    fn ruby_date_rejects_wrong_field_widths() {
        for raw in [
            "Mon Nov 29 21:18:15 +00:00 2010",
            "Mon Nov 29 21:18:15 +00 2010",
            "Mon Nov 29 21:18:15 +0000 10",
            "Mon Nov 29 21:18:15 +0000 02010",
            "Mon Nov 29 21:18:15 +0000 20100",
            "Mon Nov 29 21:18 +0000 2010",
            "Mon Nov 29 21:18:15 2010",
            "Nov 29 21:18:15 +0000 2010",
            "Mon Nov 29 21:18:15 +0000 2010 ",
        ] {
            assert!(
                matches!(Time::parse(raw), Err(TimeError::Parse { .. })),
                "{raw:?} should be rejected"
            );
            let quoted = format!("{raw:?}");
            assert!(serde_json::from_str::<Time>(&quoted).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn ruby_date_accepts_space_padded_day() {
        let t = Time::parse("Mon Nov  1 21:18:15 +0000 2010").unwrap();
        assert_eq!(t.as_datetime().timestamp(), 1288646295);
        assert_eq!(t.to_string(), "Mon Nov 01 21:18:15 +0000 2010");
        assert_eq!(Time::parse("Mon Nov 01 21:18:15 +0000 2010").unwrap(), t);
    }

    #[test]
    fn ruby_date_rejects_non_strings() {
        let err = serde_json::from_str::<Time>("1291065495").unwrap_err();
        assert!(err.to_string().contains("invalid type: integer"), "{err}");
        assert!(matches!(
            Time::from_json(&json!(1291065495)),
            Err(TimeError::TypeMismatch {
                expected: "string",
                found: "number"
            })
        ));
    }
}
