use url::Url;

/// Name used when neither the response nor the URL suggest one.
pub const FALLBACK_FILE_NAME: &str = "download";

/// Extracts a file name from a `Content-Disposition` header value.
///
/// Supports `filename="x"`, `filename=x` and the RFC 5987 form `filename*=UTF-8''x`,
/// preferring the latter when both are present. Parameter names are matched
/// case-insensitively. Directory components are stripped so the result always names a
/// file directly inside the target directory.
pub fn filename_from_content_disposition(header_value: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for parameter in split_parameters(header_value) {
        let Some((name, value)) = parameter.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "filename*" if extended.is_none() => extended = decode_extended_value(value),
            "filename" if plain.is_none() => plain = sanitize(unquote(value).trim()),
            _ => {}
        }
    }

    extended.or(plain)
}

/// Splits a header value on `;`, ignoring separators inside quoted strings.
fn split_parameters(header_value: &str) -> Vec<&str> {
    let mut parameters = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in header_value.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                parameters.push(header_value[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    parameters.push(header_value[start..].trim());

    parameters
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

/// Decodes `charset'language'percent-encoded-name`.
fn decode_extended_value(value: &str) -> Option<String> {
    let (_, encoded) = unquote(value).split_once("''")?;
    let decoded = urlencoding::decode(encoded).ok()?;
    sanitize(&decoded)
}

/// Returns the last non-empty path segment of `url`, percent-decoded.
pub fn filename_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()?;

    match urlencoding::decode(segment) {
        Ok(decoded) => sanitize(&decoded),
        Err(_) => sanitize(segment),
    }
}

/// Picks the output file name for a response, preferring the header hint.
pub fn resolve_filename(content_disposition: Option<&str>, url: &str) -> String {
    content_disposition
        .and_then(filename_from_content_disposition)
        .or_else(|| filename_from_url(url))
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}

fn sanitize(name: &str) -> Option<String> {
    let name = name.rsplit(['/', '\\']).next().unwrap_or_default();
    match name {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}
