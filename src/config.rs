use std::ffi::OsString;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::models::{AgeThreshold, OutputFormat, ScanConfig, TimeUnit};

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    ConflictingUnits { given: Vec<TimeUnit> },
    MissingThreshold,
    NegativeThreshold { unit: TimeUnit, magnitude: String },
    OutOfRange { unit: TimeUnit, magnitude: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConflictingUnits { given } => {
                let flags: Vec<String> = given.iter().map(|u| format!("-{}", u.flag())).collect();
                write!(f, "only one time unit may be given, got {}", flags.join(" "))
            }
            Self::MissingThreshold => {
                write!(f, "no age threshold given (use -m, -h or -d, or a day count)")
            }
            Self::NegativeThreshold { unit, magnitude } => {
                write!(f, "threshold for -{} must not be negative: {magnitude}", unit.flag())
            }
            Self::OutOfRange { unit, magnitude } => {
                write!(f, "threshold for -{} is too large: {magnitude}", unit.flag())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parses like C `atoi`: skips leading whitespace, takes an optional sign and
/// the longest run of digits. Anything without digits is 0.
pub fn parse_magnitude(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative {
        value.saturating_neg()
    } else {
        value
    }
}

pub fn resolve(unit: TimeUnit, magnitude: &str) -> Result<AgeThreshold, ConfigError> {
    let value = parse_magnitude(magnitude);
    let secs = value
        .checked_mul(unit.seconds())
        .ok_or_else(|| ConfigError::OutOfRange {
            unit,
            magnitude: magnitude.to_string(),
        })?;

    AgeThreshold::from_secs(secs).ok_or_else(|| ConfigError::NegativeThreshold {
        unit,
        magnitude: magnitude.to_string(),
    })
}

/// Picks the threshold from whichever unit flag was given and returns the
/// remaining root paths. Without a unit flag the first positional argument
/// is taken as a number of days. Roots are kept as raw OS strings.
pub fn resolve_args(
    minutes: Option<&str>,
    hours: Option<&str>,
    days: Option<&str>,
    positionals: &[OsString],
) -> Result<(AgeThreshold, Vec<PathBuf>), ConfigError> {
    let given: Vec<(TimeUnit, &str)> = [
        (TimeUnit::Minutes, minutes),
        (TimeUnit::Hours, hours),
        (TimeUnit::Days, days),
    ]
    .into_iter()
    .filter_map(|(unit, value)| value.map(|v| (unit, v)))
    .collect();

    match given.as_slice() {
        [] => {
            let (count, roots) = positionals
                .split_first()
                .ok_or(ConfigError::MissingThreshold)?;
            log::debug!("no unit flag given, reading {count:?} as days");
            let threshold = resolve(TimeUnit::Days, &count.to_string_lossy())?;
            Ok((threshold, roots.iter().map(PathBuf::from).collect()))
        }
        [(unit, magnitude)] => {
            let threshold = resolve(*unit, magnitude)?;
            Ok((threshold, positionals.iter().map(PathBuf::from).collect()))
        }
        many => Err(ConfigError::ConflictingUnits {
            given: many.iter().map(|(unit, _)| *unit).collect(),
        }),
    }
}

impl ScanConfig {
    pub fn new(threshold: AgeThreshold, reference: SystemTime, format: OutputFormat) -> Self {
        Self {
            threshold,
            reference,
            format,
        }
    }
}
