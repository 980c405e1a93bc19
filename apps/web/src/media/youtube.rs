//! YouTube URL recognition.
//!
//! Accepted shapes:
//! - `https://youtu.be/<id>`
//! - `https://*youtube.com/watch?v=<id>`
//! - `https://*youtube.com/embed/<id>`
//! - `https://*youtube.com/shorts/<id>`
//!
//! Everything else, including strings that are not URLs, is unrecognised.

use reqwest::Url;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Extracts the video id from a recognised YouTube URL.
pub fn youtube_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;

    let id = if host == "youtu.be" {
        first_segment(&parsed, 0)
    } else if host.contains("youtube.com") {
        match first_segment(&parsed, 0).as_deref() {
            Some("watch") if parsed.path() == "/watch" => parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            Some("embed") | Some("shorts") => first_segment(&parsed, 1),
            _ => None,
        }
    } else {
        None
    };

    id.filter(|id| !id.is_empty())
}

fn first_segment(url: &Url, index: usize) -> Option<String> {
    url.path_segments()?.nth(index).map(str::to_string)
}

/// Privacy-friendly embed URL for a recognised video; any other input is
/// returned unchanged.
pub fn embed_url(url: &str, autoplay: bool) -> String {
    let Some(id) = youtube_id(url) else {
        return url.to_string();
    };
    let Ok(mut embed) = Url::parse(EMBED_BASE) else {
        return url.to_string();
    };

    if let Ok(mut segments) = embed.path_segments_mut() {
        segments.pop_if_empty().push(&id);
    }
    {
        let mut query = embed.query_pairs_mut();
        query
            .append_pair("modestbranding", "1")
            .append_pair("rel", "0")
            .append_pair("playsinline", "1");
        if autoplay {
            query.append_pair("autoplay", "1");
        }
    }
    embed.into()
}

/// Poster image: the explicit `fallback` if given, else YouTube's own thumbnail.
pub fn poster_url(src: &str, fallback: Option<&str>) -> Option<String> {
    if let Some(poster) = fallback {
        return Some(poster.to_string());
    }
    youtube_id(src).map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link() {
        assert_eq!(youtube_id("https://youtu.be/abc123").as_deref(), Some("abc123"));
    }

    #[test]
    fn test_watch_link() {
        assert_eq!(
            youtube_id("https://www.youtube.com/watch?v=abc123").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            youtube_id("https://m.youtube.com/watch?feature=share&v=abc123&t=10").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_embed_link() {
        assert_eq!(
            youtube_id("https://www.youtube.com/embed/abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_shorts_link() {
        assert_eq!(
            youtube_id("https://www.youtube.com/shorts/abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_unrelated_urls() {
        assert_eq!(youtube_id("https://example.com"), None);
        assert_eq!(youtube_id("https://vimeo.com/watch?v=abc123"), None);
        assert_eq!(youtube_id("https://www.youtube.com/channel/abc123"), None);
        assert_eq!(youtube_id("https://www.youtube.com/watch"), None);
        assert_eq!(youtube_id("https://youtu.be/"), None);
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(youtube_id("not a url"), None);
        assert_eq!(youtube_id(""), None);
    }

    #[test]
    fn test_embed_url_params() {
        assert_eq!(
            embed_url("https://youtu.be/abc123", false),
            "https://www.youtube.com/embed/abc123?modestbranding=1&rel=0&playsinline=1"
        );
        assert_eq!(
            embed_url("https://www.youtube.com/shorts/abc123", true),
            "https://www.youtube.com/embed/abc123?modestbranding=1&rel=0&playsinline=1&autoplay=1"
        );
    }

    #[test]
    fn test_embed_url_passes_through_unrecognised() {
        assert_eq!(embed_url("https://example.com/v.mp4", true), "https://example.com/v.mp4");
    }

    #[test]
    fn test_poster_url() {
        assert_eq!(
            poster_url("https://youtu.be/abc123", None).as_deref(),
            Some("https://img.youtube.com/vi/abc123/hqdefault.jpg")
        );
        assert_eq!(
            poster_url("https://youtu.be/abc123", Some("/p.jpg")).as_deref(),
            Some("/p.jpg")
        );
        assert_eq!(poster_url("https://example.com", None), None);
    }
}
