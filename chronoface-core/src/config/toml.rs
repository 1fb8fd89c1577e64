//! Simple TOML parser for watch configuration
//!
//! This is a minimal, allocation-free TOML parser that handles only the
//! subset needed for Chronoface configuration. It does NOT support the full
//! TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - [section] headers
//! - Comments (# ...), including trailing comments
//!
//! Recognised layout:
//!
//! ```toml
//! [refresh]
//! period_ms = 20
//!
//! [face]
//! default = "neon"
//!
//! [settings]
//! clock_type = "24h"
//! ```

use super::types::WatchConfig;
use crate::faces::WatchFaceId;
use crate::format::ClockType;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is neither a header nor a key = value pair
    InvalidLine,
    /// Key not recognised in its section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Refresh,
    Face,
    Settings,
}

/// Parse TOML configuration into WatchConfig
///
/// Missing sections and keys keep their defaults.
pub fn parse_config(input: &str) -> Result<WatchConfig, ParseError> {
    let mut config = WatchConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidLine)?;
        apply_key(&mut config, section, key.trim(), value.trim())?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "refresh" => Ok(Section::Refresh),
        "face" => Ok(Section::Face),
        "settings" => Ok(Section::Settings),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_key(
    config: &mut WatchConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Refresh, "period_ms") => {
            let period = parse_u32(value)?;
            if period == 0 {
                return Err(ParseError::InvalidValue);
            }
            config.refresh.period_ms = period;
        }
        (Section::Face, "default") => {
            config.face = WatchFaceId::from_name(parse_string(value)?)
                .ok_or(ParseError::InvalidValue)?;
        }
        (Section::Settings, "clock_type") => {
            config.clock_type =
                ClockType::from_name(parse_string(value)?).ok_or(ParseError::InvalidValue)?;
        }
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_string(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)
}

fn parse_u32(value: &str) -> Result<u32, ParseError> {
    // TOML allows underscores as digit separators
    let mut result: u32 = 0;
    let mut digits = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => {
                result = result
                    .checked_mul(10)
                    .and_then(|r| r.checked_add(c as u32 - '0' as u32))
                    .ok_or(ParseError::InvalidValue)?;
                digits += 1;
            }
            '_' if digits > 0 => {}
            _ => return Err(ParseError::InvalidValue),
        }
    }
    if digits == 0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(result)
}
