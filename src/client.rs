use log::debug;
use url::Url;

use crate::error::GrabError;

/// Joins the base url and the three identifiers with `/`.
///
/// Nothing is validated or escaped, identifiers go into the url as they are.
pub fn create_url(base: &Url, comic: &str, chapter: &str, page: &str) -> String {
    format!("{base}{comic}/{chapter}/{page}")
}

/// HTTP access to the reader site.
#[derive(Debug, Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    base: Url,
}

impl SiteClient {
    pub fn new(base_url: &str) -> Result<Self, GrabError> {
        let mut base = Url::parse(base_url)?;
        // `Url::join` drops the last segment of a base without a trailing slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { http, base })
    }

    pub fn create_url(&self, comic: &str, chapter: &str, page: &str) -> String {
        create_url(&self.base, comic, chapter, page)
    }

    /// Resolves an image `src` taken from a page, relative ones against the base url.
    pub fn image_url(&self, src: &str) -> Result<Url, GrabError> {
        Ok(self.base.join(src)?)
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String, GrabError> {
        debug!("GET {url}");
        let text = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(text)
    }

    pub async fn fetch_bytes(&self, url: Url) -> Result<Vec<u8>, GrabError> {
        debug!("GET {url}");
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}
