use reqwest::Client;
use serde::de::DeserializeOwned;

use lumera_core::models::{CatalogSummary, Credits, MediaType};

use super::error::TmdbError;
use super::types::{MovieDetails, Page, SeasonDetails, SummaryRow, TvDetails};

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Image CDN prefixes, ready to prepend to a `poster_path`-style fragment.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w1280";
pub const PROFILE_BASE_URL: &str = "https://image.tmdb.org/t/p/w185";

/// TMDB v3 API client. Cheap to clone; the underlying HTTP client pools
/// connections.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    api_key: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Turn a non-2xx response into an `Api` error carrying the body text.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: body,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        tracing::debug!(path, "TMDB request");

        let resp = self
            .http
            .get(format!("{BASE_URL}{path}"))
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))
    }

    /// Fetch one page of a listing endpoint and convert the rows, dropping
    /// the ones the app cannot render.
    async fn listing(
        &self,
        path: &str,
        extra: &[(&str, &str)],
        page: u32,
        language: &str,
        fallback: Option<MediaType>,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        let page_str = page.to_string();
        let mut params: Vec<(&str, &str)> =
            vec![("language", language), ("page", page_str.as_str())];
        params.extend_from_slice(extra);

        let resp: Page<SummaryRow> = self.get_json(path, &params).await?;
        Ok(resp
            .results
            .into_iter()
            .filter_map(|row| row.into_summary(fallback))
            .collect())
    }

    // ── Listings ────────────────────────────────────────────────

    /// Weekly trending across movies and series.
    pub async fn trending_all(
        &self,
        page: u32,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        self.listing("/trending/all/week", &[], page, language, None)
            .await
    }

    pub async fn trending_movies(
        &self,
        page: u32,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        self.listing(
            "/trending/movie/week",
            &[],
            page,
            language,
            Some(MediaType::Movie),
        )
        .await
    }

    pub async fn trending_tv(
        &self,
        page: u32,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        self.listing(
            "/trending/tv/week",
            &[],
            page,
            language,
            Some(MediaType::Tv),
        )
        .await
    }

    pub async fn top_rated_movies(
        &self,
        page: u32,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        self.listing(
            "/movie/top_rated",
            &[],
            page,
            language,
            Some(MediaType::Movie),
        )
        .await
    }

    pub async fn top_rated_tv(
        &self,
        page: u32,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        self.listing("/tv/top_rated", &[], page, language, Some(MediaType::Tv))
            .await
    }

    pub async fn popular_tv(
        &self,
        page: u32,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        self.listing("/tv/popular", &[], page, language, Some(MediaType::Tv))
            .await
    }

    /// Discover movies by genre, most popular first.
    pub async fn discover_movies(
        &self,
        genre_id: u64,
        page: u32,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        let genre = genre_id.to_string();
        self.listing(
            "/discover/movie",
            &[
                ("with_genres", genre.as_str()),
                ("sort_by", "popularity.desc"),
            ],
            page,
            language,
            Some(MediaType::Movie),
        )
        .await
    }

    /// Search movies and series together. Person results are dropped.
    pub async fn search_multi(
        &self,
        query: &str,
        page: u32,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        self.listing(
            "/search/multi",
            &[("query", query), ("include_adult", "false")],
            page,
            language,
            None,
        )
        .await
    }

    /// Similar titles shown under a movie detail. Single page — the detail
    /// row is not an endless listing.
    pub async fn similar_movies(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        self.listing(
            &format!("/movie/{movie_id}/similar"),
            &[],
            1,
            language,
            Some(MediaType::Movie),
        )
        .await
    }

    pub async fn similar_tv(
        &self,
        tv_id: u64,
        language: &str,
    ) -> Result<Vec<CatalogSummary>, TmdbError> {
        self.listing(
            &format!("/tv/{tv_id}/similar"),
            &[],
            1,
            language,
            Some(MediaType::Tv),
        )
        .await
    }

    // ── Details ─────────────────────────────────────────────────

    pub async fn movie_details(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<MovieDetails, TmdbError> {
        self.get_json(&format!("/movie/{movie_id}"), &[("language", language)])
            .await
    }

    pub async fn tv_details(&self, tv_id: u64, language: &str) -> Result<TvDetails, TmdbError> {
        self.get_json(&format!("/tv/{tv_id}"), &[("language", language)])
            .await
    }

    pub async fn movie_credits(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<Credits, TmdbError> {
        self.get_json(
            &format!("/movie/{movie_id}/credits"),
            &[("language", language)],
        )
        .await
    }

    pub async fn tv_credits(&self, tv_id: u64, language: &str) -> Result<Credits, TmdbError> {
        self.get_json(&format!("/tv/{tv_id}/credits"), &[("language", language)])
            .await
    }

    /// Episode list for one season of a series.
    pub async fn tv_season(
        &self,
        tv_id: u64,
        season_number: u32,
        language: &str,
    ) -> Result<SeasonDetails, TmdbError> {
        self.get_json(
            &format!("/tv/{tv_id}/season/{season_number}"),
            &[("language", language)],
        )
        .await
    }
}
