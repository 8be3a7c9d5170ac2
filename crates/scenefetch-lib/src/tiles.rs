//! Tile layer URL templates.
//!
//! Mosaic metadata advertises tile URLs such as
//! `https://tiles{0-3}.example.com/mosaic/{z}/{x}/{y}.png`, where `{0-3}` is a range of
//! load-balancing subdomains. Map clients expect a `{s}` placeholder plus the list of
//! subdomain values instead.

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;
use url::form_urlencoded;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TileTemplateError {
    #[error("Subdomain range {{{start}-{end}}} in {template} is reversed")]
    ReversedRange {
        template: String,
        start: u32,
        end: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub subdomains: String,
}

impl TileLayer {
    pub fn from_template(template: &str, api_key: Option<&str>) -> Result<Self, TileTemplateError> {
        let (url_template, subdomains) = match find_subdomain_range(template) {
            Some((range_start, range_end, start, end)) => {
                if start > end {
                    return Err(TileTemplateError::ReversedRange {
                        template: template.to_string(),
                        start,
                        end,
                    });
                }
                let url_template = format!(
                    "{}{{s}}{}",
                    &template[..range_start],
                    &template[range_end..]
                );
                (url_template, (start..=end).join(""))
            }
            None => (template.to_string(), String::new()),
        };

        let url_template = match api_key {
            Some(api_key) => with_api_key(&url_template, api_key),
            None => url_template,
        };

        Ok(Self {
            url_template,
            subdomains,
        })
    }
}

/// Finds the first `{<digit>-<digit>}` placeholder, returning its byte span and bounds.
fn find_subdomain_range(template: &str) -> Option<(usize, usize, u32, u32)> {
    let bytes = template.as_bytes();
    bytes.windows(5).enumerate().find_map(|(idx, window)| {
        match window {
            [b'{', start, b'-', end, b'}'] if start.is_ascii_digit() && end.is_ascii_digit() => {
                Some((idx, idx + 5, u32::from(start - b'0'), u32::from(end - b'0')))
            }
            _ => None,
        }
    })
}

/// Appends `api_key` as a query parameter.
///
/// Templates carry `{s}`/`{z}` placeholders that are not valid URL syntax, so the query
/// is attached textually instead of through a parsed URL.
fn with_api_key(url_template: &str, api_key: &str) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair("api_key", api_key)
        .finish();

    let separator = if url_template.contains('?') { '&' } else { '?' };
    format!("{url_template}{separator}{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_subdomain_range() {
        let layer = TileLayer::from_template(
            "https://tiles{0-3}.example.com/v0/mosaics/color_balance_mosaic/{z}/{x}/{y}.png",
            None,
        )
        .unwrap();

        assert_eq!(
            layer.url_template,
            "https://tiles{s}.example.com/v0/mosaics/color_balance_mosaic/{z}/{x}/{y}.png"
        );
        assert_eq!(layer.subdomains, "0123");
    }

    #[test]
    fn test_appends_api_key() {
        let layer = TileLayer::from_template(
            "https://tiles{1-2}.example.com/{z}/{x}/{y}.png",
            Some("abc 123"),
        )
        .unwrap();

        assert_eq!(
            layer.url_template,
            "https://tiles{s}.example.com/{z}/{x}/{y}.png?api_key=abc+123"
        );
        assert_eq!(layer.subdomains, "12");
    }

    #[test]
    fn test_appends_api_key_to_existing_query() {
        let layer =
            TileLayer::from_template("https://tiles.example.com/{z}/{x}/{y}.png?v=2", Some("k"))
                .unwrap();

        assert_eq!(
            layer.url_template,
            "https://tiles.example.com/{z}/{x}/{y}.png?v=2&api_key=k"
        );
    }

    #[test]
    fn test_template_without_range_is_unchanged() {
        let layer =
            TileLayer::from_template("https://tiles.example.com/{z}/{x}/{y}.png", None).unwrap();

        assert_eq!(layer.url_template, "https://tiles.example.com/{z}/{x}/{y}.png");
        assert!(layer.subdomains.is_empty());
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = TileLayer::from_template("https://tiles{3-0}.example.com/{z}/{x}/{y}.png", None)
            .unwrap_err();

        assert!(matches!(
            err,
            TileTemplateError::ReversedRange { start: 3, end: 0, .. }
        ));
    }
}
