use serde::{Deserialize, Serialize};

/// Whether a catalog entry is a movie or a TV series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Tv => "TV",
        }
    }

    /// Wire string as the metadata API spells it.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Tv),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a catalog entry: the catalog ID is only unique per media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaKey {
    pub id: u64,
    pub media_type: MediaType,
}

impl MediaKey {
    pub fn new(id: u64, media_type: MediaType) -> Self {
        Self { id, media_type }
    }
}

/// Minimal record describing a movie/TV entry for grid display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub id: u64,
    pub media_type: MediaType,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f32,
    /// Release date for movies, first air date for series ("YYYY-MM-DD").
    pub release_date: Option<String>,
    pub overview: Option<String>,
}

impl CatalogSummary {
    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.id, self.media_type)
    }

    /// Four-digit year extracted from the release date, if any.
    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .filter(|y| !y.is_empty())
    }
}

/// A user-saved catalog entry. Display fields are copied at save time so
/// My List renders without refetching.
///
/// Field names match the metadata API's snake_case spelling; the persisted
/// record is forward-only (unknown fields ignored, absent ones default).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: u64,
    pub media_type: MediaType,
    /// Series records spell this `name` upstream; accept both.
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default, alias = "first_air_date")]
    pub release_date: Option<String>,
}

impl FavoriteItem {
    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.id, self.media_type)
    }
}

impl From<&CatalogSummary> for FavoriteItem {
    fn from(s: &CatalogSummary) -> Self {
        Self {
            id: s.id,
            media_type: s.media_type,
            title: s.title.clone(),
            poster_path: s.poster_path.clone(),
            backdrop_path: s.backdrop_path.clone(),
            vote_average: s.vote_average,
            release_date: s.release_date.clone(),
        }
    }
}

impl From<&FavoriteItem> for CatalogSummary {
    fn from(f: &FavoriteItem) -> Self {
        Self {
            id: f.id,
            media_type: f.media_type,
            title: f.title.clone(),
            poster_path: f.poster_path.clone(),
            backdrop_path: f.backdrop_path.clone(),
            vote_average: f.vote_average,
            release_date: f.release_date.clone(),
            overview: None,
        }
    }
}

/// Cast and crew for a detail view. The upstream payload carries far more;
/// this is the structural contract the UI actually reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// First crew member whose job matches, e.g. the director.
    pub fn crew_with_job(&self, job: &str) -> Option<&CrewMember> {
        self.crew.iter().find(|c| c.job == job)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_api_round_trip() {
        assert_eq!(MediaType::from_api_str("movie"), Some(MediaType::Movie));
        assert_eq!(MediaType::from_api_str("tv"), Some(MediaType::Tv));
        assert_eq!(MediaType::from_api_str("person"), None);
        assert_eq!(MediaType::Movie.as_api_str(), "movie");
    }

    #[test]
    fn test_summary_year() {
        let mut s = CatalogSummary {
            id: 603,
            media_type: MediaType::Movie,
            title: "The Matrix".into(),
            poster_path: None,
            backdrop_path: None,
            vote_average: 8.2,
            release_date: Some("1999-03-30".into()),
            overview: None,
        };
        assert_eq!(s.year(), Some("1999"));

        s.release_date = None;
        assert_eq!(s.year(), None);
    }

    #[test]
    fn test_favorite_item_tolerates_missing_optionals() {
        // Older records may predate some display fields.
        let json = r#"{"id": 42, "media_type": "tv", "title": "Some Show"}"#;
        let item: FavoriteItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.key(), MediaKey::new(42, MediaType::Tv));
        assert!(item.poster_path.is_none());
        assert_eq!(item.vote_average, 0.0);
    }

    #[test]
    fn test_favorite_item_accepts_series_field_names() {
        let json = r#"{
            "id": 1399,
            "media_type": "tv",
            "name": "Game of Thrones",
            "first_air_date": "2011-04-17",
            "vote_average": 8.4
        }"#;
        let item: FavoriteItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Game of Thrones");
        assert_eq!(item.release_date.as_deref(), Some("2011-04-17"));
    }

    #[test]
    fn test_keys_distinguish_media_types() {
        assert_ne!(
            MediaKey::new(7, MediaType::Movie),
            MediaKey::new(7, MediaType::Tv)
        );
    }
}
