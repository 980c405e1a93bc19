//! Media resolution for project previews and galleries.

pub mod youtube;

use crate::models::project::{MediaKind, ProjectMedia};

/// What a media record turns into on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaView {
    Image {
        src: String,
        alt: String,
    },
    Embed {
        src: String,
        poster: Option<String>,
        alt: String,
    },
    /// A YouTube record whose URL was not recognised: shown as a captioned
    /// link instead of a player.
    Placeholder {
        href: String,
        alt: String,
    },
}

pub fn resolve(media: &ProjectMedia, autoplay: bool) -> MediaView {
    let alt = media.alt.to_string();
    match media.kind {
        MediaKind::Image => MediaView::Image {
            src: media.src.to_string(),
            alt,
        },
        MediaKind::Youtube => match youtube::youtube_id(media.src) {
            Some(_) => MediaView::Embed {
                src: youtube::embed_url(media.src, autoplay),
                poster: youtube::poster_url(media.src, media.poster),
                alt,
            },
            None => MediaView::Placeholder {
                href: media.src.to_string(),
                alt,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(kind: MediaKind, src: &'static str) -> ProjectMedia {
        ProjectMedia {
            kind,
            src,
            alt: "demo",
            poster: None,
        }
    }

    #[test]
    fn test_youtube_resolves_to_embed() {
        let view = resolve(&media(MediaKind::Youtube, "https://youtu.be/abc123"), false);
        match view {
            MediaView::Embed { src, poster, .. } => {
                assert!(src.starts_with("https://www.youtube.com/embed/abc123?"));
                assert_eq!(
                    poster.as_deref(),
                    Some("https://img.youtube.com/vi/abc123/hqdefault.jpg")
                );
            }
            other => panic!("expected embed, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognised_youtube_is_placeholder() {
        let view = resolve(&media(MediaKind::Youtube, "https://example.com/clip"), false);
        assert_eq!(
            view,
            MediaView::Placeholder {
                href: "https://example.com/clip".to_string(),
                alt: "demo".to_string(),
            }
        );
    }

    #[test]
    fn test_image_passes_through() {
        let view = resolve(&media(MediaKind::Image, "/assets/1.png"), false);
        assert_eq!(
            view,
            MediaView::Image {
                src: "/assets/1.png".to_string(),
                alt: "demo".to_string(),
            }
        );
    }
}
