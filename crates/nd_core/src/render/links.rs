use url::Url;

/// Returns `url` if it is an absolute http(s) URL, otherwise `fallback`.
pub fn safe_url<'a>(url: Option<&'a str>, fallback: &'a str) -> &'a str {
    match url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(raw) => match Url::parse(raw) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => raw,
            _ => fallback,
        },
        None => fallback,
    }
}
