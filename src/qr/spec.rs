//! Parses and validates the JSON body QRlyAPI accepts.

use qrcode::EcLevel;
use serde::Deserialize;
use snafu::ResultExt;

use super::error::{InvalidJsonSnafu, QrError};

const MAX_PAYLOAD_BYTES: usize = 4296;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    const fn black() -> Self {
        Self { r: 0, g: 0, b: 0, a: 255 }
    }

    const fn white() -> Self {
        Self { r: 255, g: 255, b: 255, a: 255 }
    }
}

#[derive(Debug)]
pub struct QrSpec {
    pub payload: String,
    pub recovery_level: EcLevel,
    pub size: Option<u32>,
    pub foreground_colour: Rgba,
    pub background_colour: Rgba,
    pub trim_width: u32,
}

#[derive(Debug, Deserialize)]
struct RawSpec {
    payload: Option<String>,
    #[serde(default)]
    recovery_level: Option<String>,
    #[serde(default)]
    size: Option<i64>,
    #[serde(default)]
    foreground_colour: Option<RawColour>,
    #[serde(default)]
    background_colour: Option<RawColour>,
    #[serde(default)]
    trim_width: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawColour {
    r: Option<i64>,
    g: Option<i64>,
    b: Option<i64>,
    a: Option<i64>,
}

pub fn parse(body: &[u8]) -> Result<QrSpec, QrError> {
    let raw: RawSpec = serde_json::from_slice(body).context(InvalidJsonSnafu)?;
    validate(raw)
}

fn validate(raw: RawSpec) -> Result<QrSpec, QrError> {
    let payload = raw
        .payload
        .filter(|p| !p.is_empty())
        .ok_or(QrError::MissingPayload)?;
    if payload.as_bytes().len() > MAX_PAYLOAD_BYTES {
        return Err(QrError::PayloadTooLarge {
            max: MAX_PAYLOAD_BYTES,
        });
    }

    let recovery_level = match raw.recovery_level.as_deref().unwrap_or("medium") {
        "low" => EcLevel::L,
        "medium" => EcLevel::M,
        "high" => EcLevel::Q,
        "highest" => EcLevel::H,
        other => {
            return Err(QrError::UnknownRecoveryLevel {
                value: other.to_string(),
            })
        }
    };

    let size = match raw.size {
        None => None,
        Some(size) if size <= 0 => return Err(QrError::InvalidSize { size }),
        Some(size) if size > i64::from(u32::MAX) => {
            return Err(QrError::SizeOutOfRange {
                size,
                max: u32::MAX,
            })
        }
        Some(size) => Some(size as u32),
    };

    let foreground_colour = match raw.foreground_colour {
        None => Rgba::black(),
        Some(colour) => parse_colour(colour, "foreground_colour")?,
    };
    let background_colour = match raw.background_colour {
        None => Rgba::white(),
        Some(colour) => parse_colour(colour, "background_colour")?,
    };

    let trim_width = match raw.trim_width {
        None => 0,
        Some(width) if width >= 0 => width as u32,
        Some(width) => return Err(QrError::NegativeTrimWidth { width }),
    };

    Ok(QrSpec {
        payload,
        recovery_level,
        size,
        foreground_colour,
        background_colour,
        trim_width,
    })
}

fn parse_colour(raw: RawColour, field: &str) -> Result<Rgba, QrError> {
    let r = require_channel(raw.r, field, "r")?;
    let g = require_channel(raw.g, field, "g")?;
    let b = require_channel(raw.b, field, "b")?;
    let a = require_channel(raw.a, field, "a")?;
    Ok(Rgba { r, g, b, a })
}

fn require_channel(value: Option<i64>, field: &str, channel: &str) -> Result<u8, QrError> {
    let value = value.ok_or_else(|| QrError::MissingColourChannel {
        field: field.to_string(),
        channel: channel.to_string(),
    })?;
    u8::try_from(value).map_err(|_| QrError::ColourChannelOutOfRange {
        field: field.to_string(),
        channel: channel.to_string(),
        value,
    })
}
