//! The comic → chapters → pages download pipeline.

use futures::future::try_join_all;
use log::{debug, info};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    client::SiteClient,
    configuration::Settings,
    error::GrabError,
    extract::{extension, Extractor, PatternExtractor},
    models::Chapter,
    storage::{ensure_directory, make_directory, sanitize, save_file},
};

/// Chapters are downloaded one after the other with a fixed pause in between,
/// the pages of a chapter all at once.
///
/// Any failure stops the whole download. Pages still in flight are dropped and
/// nothing records what was already saved.
#[derive(Debug)]
pub struct Grabber<E = PatternExtractor> {
    client: SiteClient,
    extractor: E,
    delay: Duration,
    output_root: PathBuf,
}

impl Grabber<PatternExtractor> {
    pub fn new(settings: &Settings) -> Result<Self, GrabError> {
        Self::with_extractor(settings, PatternExtractor::new())
    }
}

impl<E: Extractor> Grabber<E> {
    pub fn with_extractor(settings: &Settings, extractor: E) -> Result<Self, GrabError> {
        Ok(Self {
            client: SiteClient::new(&settings.base_url)?,
            extractor,
            delay: settings.request_delay(),
            output_root: settings.output_root(),
        })
    }

    /// Where [`grab_comic`](Self::grab_comic) puts `comic` when not told otherwise.
    pub fn default_out_dir(&self, comic: &str) -> PathBuf {
        self.output_root.join(sanitize(comic))
    }

    /// Downloads every chapter of `comic`, returning the comic's directory.
    ///
    /// The directory must not exist yet. Without `out_dir` it is created under
    /// the configured output root, which is created first if needed.
    pub async fn grab_comic(
        &self,
        comic: &str,
        out_dir: Option<&Path>,
    ) -> Result<PathBuf, GrabError> {
        let out_dir = match out_dir {
            Some(dir) => dir.to_path_buf(),
            None => {
                ensure_directory(&self.output_root).await?;
                self.default_out_dir(comic)
            }
        };

        info!("Grabbing comic {comic}");

        make_directory(&out_dir).await?;
        let chapters = self.get_chapter_list(comic).await?;

        for (i, chapter) in chapters.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.delay).await;
            }
            let chapter_dir = out_dir.join(sanitize(&chapter.name));
            self.grab_chapter(comic, &chapter.id, &chapter_dir).await?;
        }

        info!("Finished {comic}, {} chapters", chapters.len());
        Ok(out_dir)
    }

    pub async fn get_chapter_list(&self, comic: &str) -> Result<Vec<Chapter>, GrabError> {
        let url = self.client.create_url(comic, "1", "1");

        info!("Getting chapter list");
        let html = self.client.fetch_text(&url).await?;
        let chapters = self
            .extractor
            .chapter_list(&html)
            .map_err(|err| GrabError::extraction(err, &url))?;

        info!("Retrieved chapter list for {comic}");
        Ok(chapters)
    }

    /// Creates `out_dir` and downloads every page of `chapter` into it.
    pub async fn grab_chapter(
        &self,
        comic: &str,
        chapter: &str,
        out_dir: &Path,
    ) -> Result<(), GrabError> {
        info!("\tGrabbing chapter {chapter}");

        make_directory(out_dir).await?;
        let pages = self.get_page_numbers(comic, chapter).await?;

        try_join_all(
            pages
                .iter()
                .map(|page| self.grab_page(comic, chapter, page, out_dir)),
        )
        .await?;

        Ok(())
    }

    /// Page numbers as listed, which is not necessarily `1..=n`.
    pub async fn get_page_numbers(
        &self,
        comic: &str,
        chapter: &str,
    ) -> Result<Vec<String>, GrabError> {
        let url = self.client.create_url(comic, chapter, "1");

        let html = self.client.fetch_text(&url).await?;
        self.extractor
            .page_list(&html)
            .map_err(|err| GrabError::extraction(err, &url))
    }

    /// Saves one page's image into `out_dir`, returning the file written.
    pub async fn grab_page(
        &self,
        comic: &str,
        chapter: &str,
        page: &str,
        out_dir: &Path,
    ) -> Result<PathBuf, GrabError> {
        let url = self.client.create_url(comic, chapter, page);

        let html = self.client.fetch_text(&url).await?;
        let src = self
            .extractor
            .image_url(&html)
            .map_err(|err| GrabError::extraction(err, &url))?;

        let image_url = self.client.image_url(&src)?;
        debug!("{image_url}");
        let bytes = self.client.fetch_bytes(image_url).await?;

        let path = out_dir.join(sanitize(&format!("{page}{}", extension(&src))));
        save_file(&path, &bytes).await?;

        info!("Saved chapter-{chapter} page-{page} to {}", path.display());
        Ok(path)
    }
}
