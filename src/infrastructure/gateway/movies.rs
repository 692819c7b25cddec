#[cfg(test)]
#[path = "movies_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;

use super::GatewayClient;
use crate::domain::models::Movie;
use crate::domain::models::Showtime;

impl GatewayClient {
    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/movies", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Failed to list movies");
            bail!("Failed to list movies");
        }

        return Ok(res.json::<Vec<Movie>>().await?);
    }

    pub async fn get_movie(&self, movie_id: &str) -> Result<Movie> {
        let res = reqwest::Client::new()
            .get(format!("{url}/movies/{movie_id}", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                movie_id = movie_id,
                "Failed to get movie"
            );
            bail!("Failed to get movie {movie_id}");
        }

        return Ok(res.json::<Movie>().await?);
    }

    pub async fn showtimes_for_movie(&self, movie_id: &str) -> Result<Vec<Showtime>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/showtimes/movie/{movie_id}", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                movie_id = movie_id,
                "Failed to list showtimes"
            );
            bail!("Failed to list showtimes for movie {movie_id}");
        }

        return Ok(res.json::<Vec<Showtime>>().await?);
    }
}
