//! Wire types for the TMDB v3 API.
//!
//! Raw serde structs plus conversions into the core catalog models. Rows
//! that cannot be rendered (no title, or a media type the app does not
//! handle, e.g. `person` results in multi-search) are dropped at
//! conversion time.

use serde::Deserialize;

use lumera_core::models::{CatalogSummary, MediaType};

/// Generic paged envelope: `{ page, results, total_pages, total_results }`.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<T>,
}

/// One row of any listing endpoint. Movies carry `title`/`release_date`,
/// series carry `name`/`first_air_date`; trending and multi-search rows
/// additionally carry `media_type`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRow {
    pub id: u64,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl SummaryRow {
    /// Convert to a catalog summary.
    ///
    /// When the row carries its own `media_type` it wins (and unsupported
    /// types drop the row); otherwise `fallback` — the type implied by the
    /// endpoint — applies.
    pub fn into_summary(self, fallback: Option<MediaType>) -> Option<CatalogSummary> {
        let media_type = match self.media_type.as_deref() {
            Some(s) => MediaType::from_api_str(s)?,
            None => fallback?,
        };
        let title = self.title.or(self.name).filter(|t| !t.is_empty())?;
        let release_date = match media_type {
            MediaType::Movie => self.release_date,
            MediaType::Tv => self.first_air_date,
        }
        .filter(|d| !d.is_empty());

        Some(CatalogSummary {
            id: self.id,
            media_type,
            title,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            vote_average: self.vote_average,
            release_date,
            overview: self.overview.filter(|o| !o.is_empty()),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full movie record for the detail view.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    pub fn to_summary(&self) -> CatalogSummary {
        CatalogSummary {
            id: self.id,
            media_type: MediaType::Movie,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            backdrop_path: self.backdrop_path.clone(),
            vote_average: self.vote_average,
            release_date: self.release_date.clone().filter(|d| !d.is_empty()),
            overview: self.overview.clone(),
        }
    }
}

/// Full series record for the detail view.
#[derive(Debug, Clone, Deserialize)]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub number_of_seasons: u32,
    #[serde(default)]
    pub seasons: Vec<SeasonRef>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub created_by: Vec<Creator>,
}

impl TvDetails {
    pub fn to_summary(&self) -> CatalogSummary {
        CatalogSummary {
            id: self.id,
            media_type: MediaType::Tv,
            title: self.name.clone(),
            poster_path: self.poster_path.clone(),
            backdrop_path: self.backdrop_path.clone(),
            vote_average: self.vote_average,
            release_date: self.first_air_date.clone().filter(|d| !d.is_empty()),
            overview: self.overview.clone(),
        }
    }

    /// Season numbers worth offering in the picker. Specials ("season 0")
    /// are skipped; falls back to `number_of_seasons` when the season list
    /// is absent.
    pub fn season_numbers(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self
            .seasons
            .iter()
            .map(|s| s.season_number)
            .filter(|&n| n > 0)
            .collect();
        if numbers.is_empty() && self.number_of_seasons > 0 {
            numbers = (1..=self.number_of_seasons).collect();
        }
        numbers.sort_unstable();
        numbers.dedup();
        numbers
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonRef {
    pub season_number: u32,
    #[serde(default)]
    pub episode_count: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Creator {
    pub name: String,
}

/// One season's episode list.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonDetails {
    #[serde(default)]
    pub episodes: Vec<EpisodeRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeRow {
    pub episode_number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_row_conversion() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/abc.jpg",
            "vote_average": 8.2,
            "release_date": "1999-03-30",
            "overview": "A hacker learns the truth."
        }"#;
        let row: SummaryRow = serde_json::from_str(json).unwrap();
        let summary = row.into_summary(Some(MediaType::Movie)).unwrap();
        assert_eq!(summary.media_type, MediaType::Movie);
        assert_eq!(summary.title, "The Matrix");
        assert_eq!(summary.release_date.as_deref(), Some("1999-03-30"));
    }

    #[test]
    fn test_tv_row_uses_name_and_first_air_date() {
        let json = r#"{
            "id": 1399,
            "name": "Game of Thrones",
            "media_type": "tv",
            "vote_average": 8.4,
            "first_air_date": "2011-04-17"
        }"#;
        let row: SummaryRow = serde_json::from_str(json).unwrap();
        let summary = row.into_summary(None).unwrap();
        assert_eq!(summary.media_type, MediaType::Tv);
        assert_eq!(summary.title, "Game of Thrones");
        assert_eq!(summary.release_date.as_deref(), Some("2011-04-17"));
    }

    #[test]
    fn test_person_row_is_dropped() {
        let json = r#"{"id": 500, "name": "Tom Cruise", "media_type": "person"}"#;
        let row: SummaryRow = serde_json::from_str(json).unwrap();
        assert!(row.into_summary(None).is_none());
    }

    #[test]
    fn test_untitled_row_is_dropped() {
        let json = r#"{"id": 1, "media_type": "movie", "vote_average": 5.0}"#;
        let row: SummaryRow = serde_json::from_str(json).unwrap();
        assert!(row.into_summary(None).is_none());
    }

    #[test]
    fn test_row_without_type_or_fallback_is_dropped() {
        let json = r#"{"id": 1, "title": "Mystery"}"#;
        let row: SummaryRow = serde_json::from_str(json).unwrap();
        assert!(row.into_summary(None).is_none());
    }

    #[test]
    fn test_paged_envelope() {
        let json = r#"{
            "page": 2,
            "results": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}],
            "total_pages": 10,
            "total_results": 200
        }"#;
        let page: Page<SummaryRow> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.results.len(), 2);
    }

    #[test]
    fn test_tv_details_season_numbers_skip_specials() {
        let json = r#"{
            "id": 1399,
            "name": "Game of Thrones",
            "number_of_seasons": 2,
            "seasons": [
                {"season_number": 0, "episode_count": 14, "name": "Specials"},
                {"season_number": 1, "episode_count": 10, "name": "Season 1"},
                {"season_number": 2, "episode_count": 10, "name": "Season 2"}
            ]
        }"#;
        let details: TvDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.season_numbers(), vec![1, 2]);
    }

    #[test]
    fn test_tv_details_seasons_fallback_to_count() {
        let json = r#"{"id": 1, "name": "Show", "number_of_seasons": 3}"#;
        let details: TvDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.season_numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn test_credits_structural_contract() {
        // The upstream payload is much richer; only this subset is read.
        let json = r#"{
            "id": 603,
            "cast": [
                {"name": "Keanu Reeves", "character": "Neo", "profile_path": "/kr.jpg", "order": 0},
                {"name": "Carrie-Anne Moss", "character": "Trinity"}
            ],
            "crew": [
                {"name": "Lana Wachowski", "job": "Director", "department": "Directing"}
            ]
        }"#;
        let credits: lumera_core::models::Credits = serde_json::from_str(json).unwrap();
        assert_eq!(credits.cast.len(), 2);
        assert_eq!(
            credits.crew_with_job("Director").map(|c| c.name.as_str()),
            Some("Lana Wachowski")
        );
    }
}
