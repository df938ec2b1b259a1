use url::Url;

const MIN_HEX_ID: usize = 6;
const MAX_HEX_ID: usize = 20;

/// Derive `{slug}.md` from a URL: the last segment of the path, with any
/// Medium-style trailing hex id (`-4f96d2edeac0`) removed.
///
/// A root or empty path yields `.md`; no filesystem-legality checks are
/// applied. The derivation is pure, so the same URL always maps to the
/// same filename.
pub fn slug_filename(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url)?;
    let path = parsed.path().trim_end_matches('/');
    let slug = path.rsplit('/').next().unwrap_or("");
    Ok(format!("{}.md", strip_trailing_hex_id(slug)))
}

/// Remove a `-<hex>` suffix when the hex run is 6 to 20 characters,
/// case-insensitive. Anything shorter or longer is treated as part of
/// the title.
fn strip_trailing_hex_id(slug: &str) -> &str {
    let Some(pos) = slug.rfind('-') else {
        return slug;
    };
    let tail = &slug[pos + 1..];
    let in_bounds = (MIN_HEX_ID..=MAX_HEX_ID).contains(&tail.len());
    if in_bounds && tail.bytes().all(|b| b.is_ascii_hexdigit()) {
        &slug[..pos]
    } else {
        slug
    }
}
