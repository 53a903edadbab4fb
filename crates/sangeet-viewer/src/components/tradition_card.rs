//! Card for a single musical tradition.

use dioxus::prelude::*;

use sangeet_core::links::{self, SearchImageBlock};
use sangeet_core::{ThemeToken, Tradition};

#[component]
pub fn TraditionCard(tradition: Tradition, theme: ThemeToken, context: String) -> Element {
    let text_class = theme.text_class();
    let portrait = SearchImageBlock::artist_portrait(&tradition, &context);
    let cover = SearchImageBlock::album_cover(&tradition, &context);
    let artists: Vec<(&'static str, String)> = tradition
        .famous_artists
        .iter()
        .map(|artist| (*artist, links::artist_biography_url(artist, &tradition, &context)))
        .collect();

    rsx! {
        article {
            class: "tradition-card",

            h4 {
                class: "tradition-name {text_class}",
                span { class: "tradition-icon", "♪" }
                "{tradition.name}"
            }

            p { class: "tradition-description", "{tradition.description}" }

            div {
                class: "visual-artifacts",
                p { class: "section-label", "Visual Artifacts (Click to Search)" }
                div {
                    class: "search-blocks",
                    SearchImageCard { block: portrait, icon: "🎤", theme }
                    SearchImageCard { block: cover, icon: "🖼", theme }
                }
            }

            div {
                class: "tradition-section",
                p { class: "section-label", "🎤 Famous Artists:" }
                ul {
                    class: "artist-list",
                    for (artist, url) in artists {
                        li {
                            key: "{artist}",
                            span { class: "artist-link-icon {text_class}", "🔗" }
                            a {
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{artist}"
                            }
                        }
                    }
                }
            }

            div {
                class: "tradition-section",
                p { class: "section-label", "🔍 Songs:" }
                if let Some(media_id) = tradition.media_reference_id {
                    div {
                        class: "video-frame",
                        iframe {
                            src: "{links::video_embed_url(media_id)}",
                            title: "{tradition.example_song}",
                            allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                            allowfullscreen: true,
                        }
                    }
                } else {
                    p {
                        class: "no-video",
                        "No video available. Use the search block above to explore."
                    }
                }
            }
        }
    }
}

/// Dashed placeholder tile that opens an image search.
#[component]
fn SearchImageCard(block: SearchImageBlock, icon: &'static str, theme: ThemeToken) -> Element {
    rsx! {
        a {
            class: "search-image-block",
            href: "{block.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            div { class: "search-image-icon {theme.text_class()}", "{icon}" }
            p { class: "search-image-title", "{block.title}" }
            p { class: "search-image-hint", "Click to View Images" }
        }
    }
}
