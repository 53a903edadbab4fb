//! Outbound search and media links built from catalog fields.

use crate::catalog::{Region, Tradition};

const SEARCH_ENDPOINT: &str = "https://www.google.com/search";
const VIDEO_EMBED_ENDPOINT: &str = "https://www.youtube.com/embed";

/// Percent-encodes a query component, leaving the characters
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Image search for a free-text keyword.
pub fn image_search_url(keyword: &str) -> String {
    format!("{}?tbm=isch&q={}", SEARCH_ENDPOINT, encode_component(keyword))
}

/// Web search for an artist's biography within a tradition.
pub fn artist_biography_url(artist: &str, tradition: &Tradition, context: &str) -> String {
    format!(
        "{}?q={}+{}+{}+Music+Biography",
        SEARCH_ENDPOINT,
        encode_component(artist),
        encode_component(tradition.name),
        encode_component(context),
    )
}

/// Web search for documentaries about a region's folk music.
pub fn region_documentary_url(region: &Region) -> String {
    format!(
        "{}?q={}+folk+music+documentary",
        SEARCH_ENDPOINT,
        encode_component(region.display_name)
    )
}

/// Embeddable player URL for a media reference id.
pub fn video_embed_url(media_reference_id: &str) -> String {
    format!("{}/{}", VIDEO_EMBED_ENDPOINT, encode_component(media_reference_id))
}

/// A clickable placeholder that opens an image search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchImageBlock {
    pub title: String,
    pub keyword: String,
    pub url: String,
}

impl SearchImageBlock {
    fn new(title: &str, keyword: String) -> Self {
        Self {
            title: title.to_string(),
            url: image_search_url(&keyword),
            keyword,
        }
    }

    /// Portrait search for the tradition's lead artist.
    pub fn artist_portrait(tradition: &Tradition, context: &str) -> Self {
        let subject = tradition.lead_artist().unwrap_or(tradition.name);
        Self::new(
            tradition.lead_artist().unwrap_or("Artist Photo"),
            format!("{} {} Singer Portrait", subject, context),
        )
    }

    /// Album cover search for the tradition's example song.
    pub fn album_cover(tradition: &Tradition, context: &str) -> Self {
        let (title, subject) = if tradition.example_song.is_empty() {
            ("Album Cover", tradition.name)
        } else {
            (tradition.example_song, tradition.example_song)
        };
        Self::new(title, format!("{} {} Song Album Cover", subject, context))
    }
}
