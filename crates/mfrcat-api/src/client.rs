// Hand-crafted async HTTP client for the NHTSA vPIC API.
//
// Base path: /api/
// All endpoints are public GETs returning a `{Count, Message, Results}` envelope.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::wire;

/// Async client for the vPIC vehicle data API.
///
/// Communicates via JSON REST endpoints under the configured base URL.
/// The base URL is injected — there is no hard-coded host — so tests point
/// it at a mock server and deployments can target vPIC mirrors.
pub struct VpicClient {
    http: reqwest::Client,
    base_url: Url,
}

impl VpicClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and force a trailing slash so relative joins work.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The normalized base URL this client targets.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"vehicles/getallmanufacturers"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining a relative path works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP plumbing ────────────────────────────────────────────────

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<wire::Envelope<T>, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .query(&[("format", "json")])
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            let raw = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            })
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Fetch the full manufacturer summary list.
    ///
    /// `GET vehicles/getallmanufacturers?format=json` — one request, no
    /// pagination; the returned vector is the complete snapshot the catalog
    /// works from.
    pub async fn all_manufacturers(&self) -> Result<Vec<wire::ManufacturerRecord>, Error> {
        let envelope: wire::Envelope<wire::ManufacturerRecord> =
            self.get_envelope("vehicles/getallmanufacturers").await?;
        Ok(envelope.results)
    }

    /// Fetch the extended detail record for one manufacturer.
    ///
    /// `GET vehicles/getmanufacturerdetails/{id}?format=json`. The endpoint
    /// wraps the record in a one-element `Results` array; an empty array
    /// maps to [`Error::NotFound`].
    pub async fn manufacturer_details(
        &self,
        id: u32,
    ) -> Result<wire::ManufacturerDetailRecord, Error> {
        let envelope: wire::Envelope<wire::ManufacturerDetailRecord> = self
            .get_envelope(&format!("vehicles/getmanufacturerdetails/{id}"))
            .await?;
        envelope
            .results
            .into_iter()
            .next()
            .ok_or(Error::NotFound { id })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let url = VpicClient::normalize_base_url("https://vpic.nhtsa.dot.gov/api").unwrap();
        assert_eq!(url.as_str(), "https://vpic.nhtsa.dot.gov/api/");
    }

    #[test]
    fn base_url_with_trailing_slash_is_unchanged() {
        let url = VpicClient::normalize_base_url("https://vpic.nhtsa.dot.gov/api/").unwrap();
        assert_eq!(url.as_str(), "https://vpic.nhtsa.dot.gov/api/");
    }

    #[test]
    fn relative_join_preserves_base_path() {
        let client = VpicClient::from_reqwest(
            "https://vpic.nhtsa.dot.gov/api",
            reqwest::Client::new(),
        )
        .unwrap();
        assert_eq!(
            client.url("vehicles/getallmanufacturers").as_str(),
            "https://vpic.nhtsa.dot.gov/api/vehicles/getallmanufacturers"
        );
    }
}
