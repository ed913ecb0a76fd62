use crate::utils::error::{AppError, Result};

/// Client for the Beagle HTTP API, relative to the page origin
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }

    fn get_origin() -> Result<String> {
        web_sys::window()
            .ok_or(AppError::Location)?
            .location()
            .origin()
            .map_err(|_| AppError::Location)
    }

    async fn get_request(&self, path: &str) -> Result<String> {
        let url = format!("{}{path}", Self::get_origin()?);
        log::debug!("GET {url}");
        let response = reqwest::get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

mod graph;

pub use graph::*;
