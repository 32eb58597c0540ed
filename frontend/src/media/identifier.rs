//! Turns raw video links into a canonical identifier.
//!
//! Links arrive from static content tables in many shapes (`youtu.be/…`,
//! `/shorts/…`, `/embed/…`, `watch?v=…`). Each shape is one entry in
//! [`SHAPES`]; adding a new shape means appending an entry there.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

const SHORT_LINK_HOST: &str = "youtu.be";
const SHORT_FORM_PREFIX: &str = "/shorts/";
const EMBED_PREFIX: &str = "/embed/";
const ID_QUERY_PARAM: &str = "v";
const SHORT_FORM_MARKER: &str = "shorts";

pub const MIN_ID_LEN: usize = 6;
pub const MAX_ID_LEN: usize = 20;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Za-z_-]{6,20}$").unwrap());

static LOOSE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{6,})").unwrap());

/// Path words that look like tokens but never name a video.
const RESERVED_SEGMENTS: &[&str] = &["shorts", "embed", "watch", "channel", "playlist"];

/// Raw link as it appears in a content table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    pub raw_url: String,
}

impl MediaReference {
    pub fn new(raw_url: impl Into<String>) -> Self {
        Self { raw_url: raw_url.into() }
    }

    pub fn resolve(&self) -> Option<ResolvedMediaIdentifier> {
        extract_identifier(&self.raw_url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Standard,
    ShortForm,
}

impl Variant {
    /// Padding-bottom percentage for an intrinsic-ratio box.
    pub fn aspect_padding(&self) -> &'static str {
        match self {
            Variant::Standard => "56.25%",
            Variant::ShortForm => "177.78%",
        }
    }

    pub fn aspect_class(&self) -> &'static str {
        match self {
            Variant::Standard => "aspect-16-9",
            Variant::ShortForm => "aspect-9-16",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Standard => "Full",
            Variant::ShortForm => "Short",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedMediaIdentifier {
    pub id: String,
    pub variant: Variant,
}

/// Which URL shape produced an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlShape {
    ShortLink,
    ShortFormPath,
    EmbedPath,
    IdQuery,
    TrailingSegment,
}

impl UrlShape {
    fn variant(&self) -> Variant {
        match self {
            UrlShape::ShortFormPath => Variant::ShortForm,
            _ => Variant::Standard,
        }
    }
}

struct ParsedLink<'a> {
    host: String,
    path: &'a str,
    url: &'a Url,
}

type ShapeMatcher = fn(&ParsedLink<'_>) -> Option<String>;

/// Tried in order; the first shape yielding a well-formed token wins.
const SHAPES: &[(UrlShape, ShapeMatcher)] = &[
    (UrlShape::ShortLink, match_short_link),
    (UrlShape::ShortFormPath, match_short_form_path),
    (UrlShape::EmbedPath, match_embed_path),
    (UrlShape::IdQuery, match_id_query),
    (UrlShape::TrailingSegment, match_trailing_segment),
];

fn match_short_link(link: &ParsedLink<'_>) -> Option<String> {
    if link.host != SHORT_LINK_HOST {
        return None;
    }
    first_segment(link.path)
}

fn match_short_form_path(link: &ParsedLink<'_>) -> Option<String> {
    if !link.path.starts_with(SHORT_FORM_PREFIX) {
        return None;
    }
    last_segment(link.path)
}

fn match_embed_path(link: &ParsedLink<'_>) -> Option<String> {
    if !link.path.starts_with(EMBED_PREFIX) {
        return None;
    }
    last_segment(link.path)
}

fn match_id_query(link: &ParsedLink<'_>) -> Option<String> {
    link.url
        .query_pairs()
        .find(|(key, _)| key == ID_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn match_trailing_segment(link: &ParsedLink<'_>) -> Option<String> {
    last_segment(link.path).filter(|segment| (MIN_ID_LEN..=MAX_ID_LEN).contains(&segment.len()))
}

fn first_segment(path: &str) -> Option<String> {
    path.split('/').find(|s| !s.is_empty()).map(str::to_string)
}

fn last_segment(path: &str) -> Option<String> {
    path.split('/').filter(|s| !s.is_empty()).last().map(str::to_string)
}

pub fn is_token(candidate: &str) -> bool {
    TOKEN.is_match(candidate)
}

fn is_reserved(candidate: &str) -> bool {
    RESERVED_SEGMENTS.contains(&candidate.to_lowercase().as_str())
}

/// Derives `{id, variant}` from a raw link, or `None` when nothing
/// identifier-shaped can be found.
///
/// When the link parses as a URL the variant follows the path alone: a
/// `shorts` marker that only appears in the query string or fragment does
/// not make a standard watch link short-form. Unparseable input falls back
/// to a permissive token scan, and there the marker is looked for anywhere.
pub fn extract_identifier(raw: &str) -> Option<ResolvedMediaIdentifier> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) => extract_structured(&url),
        Err(_) => extract_loose(trimmed),
    }
}

fn extract_structured(url: &Url) -> Option<ResolvedMediaIdentifier> {
    let host = url
        .host_str()
        .unwrap_or_default()
        .trim_start_matches("www.")
        .to_lowercase();
    let link = ParsedLink { host, path: url.path(), url };

    let (shape, id) = SHAPES
        .iter()
        .find_map(|(shape, matcher)| {
            matcher(&link)
                .filter(|id| is_token(id) && !is_reserved(id))
                .map(|id| (*shape, id))
        })?;

    let marked = contains_marker(&link.host) || contains_marker(link.path);
    let variant = if marked { Variant::ShortForm } else { shape.variant() };
    Some(ResolvedMediaIdentifier { id, variant })
}

fn extract_loose(raw: &str) -> Option<ResolvedMediaIdentifier> {
    let id = LOOSE_TOKEN
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|token| token.len() <= MAX_ID_LEN && !is_reserved(token))
        .last()?
        .to_string();

    let variant = if contains_marker(raw) { Variant::ShortForm } else { Variant::Standard };
    Some(ResolvedMediaIdentifier { id, variant })
}

fn contains_marker(text: &str) -> bool {
    text.to_lowercase().contains(SHORT_FORM_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(id: &str) -> Option<ResolvedMediaIdentifier> {
        Some(ResolvedMediaIdentifier { id: id.to_string(), variant: Variant::Standard })
    }

    fn short(id: &str) -> Option<ResolvedMediaIdentifier> {
        Some(ResolvedMediaIdentifier { id: id.to_string(), variant: Variant::ShortForm })
    }

    #[test]
    fn short_link_uses_first_segment() {
        assert_eq!(extract_identifier("https://youtu.be/abc123XYZ9"), standard("abc123XYZ9"));
        assert_eq!(extract_identifier("https://youtu.be/kk7_evjf-RE?t=12"), standard("kk7_evjf-RE"));
    }

    #[test]
    fn short_form_path_sets_variant() {
        assert_eq!(
            extract_identifier("https://platform.com/shorts/abc123XYZ9?feature=share"),
            short("abc123XYZ9")
        );
        assert_eq!(
            extract_identifier("https://youtube.com/shorts/U9HROCPcX4Q?feature=share"),
            short("U9HROCPcX4Q")
        );
    }

    #[test]
    fn embed_path_uses_last_segment() {
        assert_eq!(extract_identifier("https://www.youtube.com/embed/dQw4w9WgXcQ"), standard("dQw4w9WgXcQ"));
    }

    #[test]
    fn bare_prefix_paths_yield_none() {
        assert_eq!(extract_identifier("https://www.youtube.com/shorts/"), None);
        assert_eq!(extract_identifier("https://www.youtube.com/embed/"), None);
        assert_eq!(extract_identifier("https://youtu.be/shorts"), None);
        assert_eq!(extract_identifier("https://youtu.be/embed/"), None);
        assert_eq!(extract_identifier("https://www.youtube.com/Playlist"), None);
    }

    #[test]
    fn query_parameter_carries_id() {
        assert_eq!(
            extract_identifier("https://www.youtube.com/watch?v=jzF_Cc5KeWs&list=PL123"),
            standard("jzF_Cc5KeWs")
        );
    }

    #[test]
    fn trailing_segment_needs_plausible_length() {
        assert_eq!(extract_identifier("https://vimeo.example/video/a1b2c3d4"), standard("a1b2c3d4"));
        assert_eq!(extract_identifier("https://example.com/about"), None);
        assert_eq!(extract_identifier("https://example.com/"), None);
        assert_eq!(extract_identifier("https://example.com/this-segment-is-far-too-long-to-be-an-id"), None);
    }

    #[test]
    fn garbage_yields_none() {
        assert_eq!(extract_identifier("not a url"), None);
        assert_eq!(extract_identifier(""), None);
        assert_eq!(extract_identifier("   "), None);
        assert_eq!(extract_identifier("https://youtu.be/"), None);
    }

    #[test]
    fn malformed_links_fall_back_to_token_scan() {
        assert_eq!(extract_identifier("youtube.com/watch?v=jzF_Cc5KeWs"), standard("jzF_Cc5KeWs"));
        assert_eq!(extract_identifier("youtube.com/shorts/ErZZV0GDgHw"), short("ErZZV0GDgHw"));
    }

    #[test]
    fn query_marker_does_not_override_structured_path() {
        assert_eq!(
            extract_identifier("https://www.youtube.com/watch?v=jzF_Cc5KeWs&from=shorts"),
            standard("jzF_Cc5KeWs")
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(extract_identifier("  https://youtu.be/zSEaA7X4THw \n"), standard("zSEaA7X4THw"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let inputs = [
            "https://youtu.be/abc123XYZ9",
            "https://youtube.com/shorts/hnKJcufqXTE?feature=share",
            "not a url",
            "youtube.com/watch?v=jzF_Cc5KeWs",
        ];
        for input in inputs {
            assert_eq!(extract_identifier(input), extract_identifier(input));
        }
    }

    #[test]
    fn reference_resolves_through_extractor() {
        let reference = MediaReference::new("https://youtu.be/x75tbg0RBus");
        assert_eq!(reference.resolve(), standard("x75tbg0RBus"));
    }
}
