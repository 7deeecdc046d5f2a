//! HTTP retrieval of the plate-boundary document.

use crate::{BoundarySet, TectonicsError, parse::parse_boundaries};

/// Downloads and parses the boundary document at `url`.
///
/// The request timeout is whatever `client` was built with.
///
/// # Errors
///
/// Returns [`TectonicsError`] if the request fails or times out, the
/// server answers with a non-success status, or the body cannot be parsed.
pub async fn fetch_boundaries(
    client: &reqwest::Client,
    url: &str,
) -> Result<BoundarySet, TectonicsError> {
    log::info!("Fetching tectonic plate boundaries from {url}");

    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(TectonicsError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = resp.text().await?;
    let set = parse_boundaries(&body)?;

    log::info!("Loaded {} boundary lines", set.lines.len());
    Ok(set)
}
