//! Parses the query-string DSL into a typed [`ParamSet`].
//!
//! The DSL is not `application/x-www-form-urlencoded`: it's a raw query
//! string where a bare key with no `=` is a flag, `+` is not a stand-in for
//! space, and later occurrences of a key win over earlier ones. That rules
//! out `url::form_urlencoded` (which folds `+` into a space) in favor of
//! splitting by hand and percent-decoding each token ourselves.

use percent_encoding::percent_decode_str;
use serde::Serialize;

use super::error::ResponderError;

/// The directives a client encoded into the query string, plus an always-present
/// `random_delay` sub-object (empty when the client didn't ask for one) so the
/// echoed JSON record never needs to omit the key entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParamSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    pub random_delay: RandomDelay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_body: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_headers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_headers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RandomDelay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

/// Parses a raw query string (no leading `?`) into a [`ParamSet`].
///
/// Unrecognized keys are ignored; malformed values for a recognized key fail
/// the whole request with a 400.
pub fn parse(query: &str) -> Result<ParamSet, ResponderError> {
    let mut params = ParamSet::default();

    for (key, raw_value) in tokenize(query) {
        match key.as_ref() {
            "status_code" => {
                let value = require_value(raw_value, "status_code")?;
                params.status_code = Some(parse_u16(&value, "status_code")?);
            }
            "delay" => {
                let value = require_value(raw_value, "delay")?;
                params.delay = Some(parse_u64(&value, "delay")?);
            }
            "random_delay" => {
                params.random_delay = match &raw_value {
                    None => RandomDelay::default(),
                    Some(value) => parse_random_delay(value)?,
                };
            }
            "no_body" => params.no_body = Some(true),
            "no_headers" => params.no_headers = Some(true),
            "headers" => {
                let value = raw_value.unwrap_or_default();
                params.headers = Some(decode_csv(&value, "headers")?);
            }
            "body" => {
                let value = require_value(raw_value, "body")?;
                validate_base64(&value, "body")?;
                params.body = Some(value.into_owned());
            }
            "expected_headers" => {
                let value = raw_value.unwrap_or_default();
                params.expected_headers = Some(decode_csv(&value, "expected_headers")?);
            }
            _ => {}
        }
    }

    Ok(params)
}

fn tokenize(query: &str) -> impl Iterator<Item = (std::borrow::Cow<'_, str>, Option<std::borrow::Cow<'_, str>>)> {
    query.split('&').filter(|pair| !pair.is_empty()).map(|pair| {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, Some(v)),
            None => (pair, None),
        };
        (
            percent_decode_str(key).decode_utf8_lossy(),
            value.map(|v| percent_decode_str(v).decode_utf8_lossy()),
        )
    })
}

fn require_value(
    value: Option<std::borrow::Cow<'_, str>>,
    key: &str,
) -> Result<std::borrow::Cow<'_, str>, ResponderError> {
    value.ok_or_else(|| ResponderError::MissingValue { key: key.to_string() })
}

fn parse_u16(value: &str, key: &str) -> Result<u16, ResponderError> {
    value.parse().map_err(|_| ResponderError::InvalidInteger {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(value: &str, key: &str) -> Result<u64, ResponderError> {
    value.parse().map_err(|_| ResponderError::InvalidInteger {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_random_delay(value: &str) -> Result<RandomDelay, ResponderError> {
    let (min_raw, max_raw) = value
        .split_once(',')
        .ok_or(ResponderError::MalformedRandomDelay)?;
    let min = parse_u64(min_raw, "random_delay.min")?;
    let max = parse_u64(max_raw, "random_delay.max")?;
    if min > max {
        return Err(ResponderError::InvertedRandomDelay);
    }
    Ok(RandomDelay {
        min: Some(min),
        max: Some(max),
    })
}

fn validate_base64(value: &str, key: &str) -> Result<(), ResponderError> {
    use base64::prelude::{Engine as _, BASE64_STANDARD};
    BASE64_STANDARD
        .decode(value.as_bytes())
        .map_err(|_| ResponderError::InvalidBase64 { key: key.to_string() })?;
    Ok(())
}

/// Decodes a comma-separated list of base64 tokens into UTF-8 strings.
fn decode_csv(value: &str, key: &str) -> Result<Vec<String>, ResponderError> {
    use base64::prelude::{Engine as _, BASE64_STANDARD};

    value
        .split(',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let bytes = BASE64_STANDARD
                .decode(token.as_bytes())
                .map_err(|_| ResponderError::InvalidBase64 { key: key.to_string() })?;
            String::from_utf8(bytes)
                .map_err(|_| ResponderError::NonUtf8Value { key: key.to_string() })
        })
        .collect()
}
