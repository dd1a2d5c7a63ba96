//! Playback URL construction.
//!
//! The app never streams anything itself: it builds a resolver URL from the
//! catalog identity and hands it to an external surface. The resolver's
//! response is not parsed or validated here.

use url::Url;

use crate::error::LumeraError;

/// What the user asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayTarget {
    Movie { id: u64 },
    Episode { id: u64, season: u32, episode: u32 },
}

/// Build the resolver URL for a playback target.
///
/// `{base}/movie/{id}` or `{base}/tv/{id}/{season}/{episode}`, with
/// `?lang=it` appended for the Italian catalog language.
pub fn stream_url(base: &str, target: PlayTarget, italian: bool) -> Result<Url, LumeraError> {
    let base = base.trim_end_matches('/');
    let mut url = match target {
        PlayTarget::Movie { id } => Url::parse(&format!("{base}/movie/{id}"))?,
        PlayTarget::Episode {
            id,
            season,
            episode,
        } => Url::parse(&format!("{base}/tv/{id}/{season}/{episode}"))?,
    };
    if italian {
        url.query_pairs_mut().append_pair("lang", "it");
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_url() {
        let url = stream_url("https://vixsrc.to", PlayTarget::Movie { id: 603 }, false).unwrap();
        assert_eq!(url.as_str(), "https://vixsrc.to/movie/603");
    }

    #[test]
    fn test_episode_url() {
        let url = stream_url(
            "https://vixsrc.to",
            PlayTarget::Episode {
                id: 1399,
                season: 2,
                episode: 5,
            },
            false,
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://vixsrc.to/tv/1399/2/5");
    }

    #[test]
    fn test_italian_language_tag() {
        let url = stream_url("https://vixsrc.to", PlayTarget::Movie { id: 603 }, true).unwrap();
        assert_eq!(url.as_str(), "https://vixsrc.to/movie/603?lang=it");
    }

    #[test]
    fn test_trailing_slash_base() {
        let url = stream_url("https://vixsrc.to/", PlayTarget::Movie { id: 1 }, false).unwrap();
        assert_eq!(url.as_str(), "https://vixsrc.to/movie/1");
    }
}
