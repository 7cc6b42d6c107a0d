//! Pulling chapter lists, page lists and image urls out of the site's markup.
//!
//! The markup is matched with regular expressions against one specific page
//! template. Anything that reads html sits behind [`Extractor`] so a parser
//! backed implementation can replace [`PatternExtractor`] without touching the
//! download pipeline.

use regex::Regex;
use thiserror::Error;

use crate::models::Chapter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("couldn't find the {0}")]
    MissingFragment(&'static str),
    #[error("found {ids} chapter ids but {names} chapter names")]
    CountMismatch { ids: usize, names: usize },
}

pub trait Extractor: Send + Sync {
    /// Chapters in the order the site lists them.
    fn chapter_list(&self, html: &str) -> Result<Vec<Chapter>, ExtractError>;

    /// Page numbers in document order, duplicates included.
    fn page_list(&self, html: &str) -> Result<Vec<String>, ExtractError>;

    /// The `src` of the page's image, exactly as written in the markup.
    fn image_url(&self, html: &str) -> Result<String, ExtractError>;
}

/// Regex based [`Extractor`] for the `omgbeaupeep.com` reader template.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    chapter_select: Regex,
    page_select: Regex,
    option_value: Regex,
    option_text: Regex,
    image: Regex,
}

impl PatternExtractor {
    pub fn new() -> Self {
        Self {
            // Greedy up to the last closing tag on the line, `.` never crosses a newline.
            chapter_select: Regex::new(
                r#"<span>Select a Book <select name="chapter" onchange="change_chapter\(['"].*?['"], this\.value\)">(.*)</select></span>"#,
            )
            .expect("chapter select regex should be valid"),
            page_select: Regex::new(
                r#"Page <select name="page" onchange="change_page\(['"].*?['"], this\.value\)">(.*)</select>"#,
            )
            .expect("page select regex should be valid"),
            // Ids can be things like `33.01`, so take anything up to the quote.
            option_value: Regex::new(r#"<option value="(.*?)""#)
                .expect("option value regex should be valid"),
            option_text: Regex::new(r#"<option value="[^"]*"[^>]*>(.*?)</option>"#)
                .expect("option text regex should be valid"),
            image: Regex::new(concat!(
                r"(?m)^<!-- End Advertisement -->\n",
                r"</div>\n",
                r"</td>\n",
                r"</tr>\n",
                r"<tr>\n",
                // Lazy href so the first image on the line wins.
                r#"<td><a href=".*?"><img src="(.*?)" "#,
            ))
            .expect("image regex should be valid"),
        }
    }

    fn values(&self, fragment: &str) -> Vec<String> {
        self.option_value
            .captures_iter(fragment)
            .map(|caps| caps[1].to_owned())
            .collect()
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// First capture group of `regex` in `html`, treating an empty capture as absent.
fn fragment<'a>(
    regex: &Regex,
    html: &'a str,
    what: &'static str,
) -> Result<&'a str, ExtractError> {
    regex
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .ok_or(ExtractError::MissingFragment(what))
}

impl Extractor for PatternExtractor {
    fn chapter_list(&self, html: &str) -> Result<Vec<Chapter>, ExtractError> {
        let fragment = fragment(&self.chapter_select, html, "chapter list")?;

        let ids = self.values(fragment);
        if ids.is_empty() {
            return Err(ExtractError::MissingFragment("chapter ids"));
        }

        let names: Vec<String> = self
            .option_text
            .captures_iter(fragment)
            .map(|caps| caps[1].to_owned())
            .collect();
        if names.is_empty() {
            return Err(ExtractError::MissingFragment("chapter names"));
        }

        if ids.len() != names.len() {
            return Err(ExtractError::CountMismatch {
                ids: ids.len(),
                names: names.len(),
            });
        }

        Ok(ids
            .into_iter()
            .zip(names)
            .map(|(id, name)| Chapter { id, name })
            .collect())
    }

    fn page_list(&self, html: &str) -> Result<Vec<String>, ExtractError> {
        let fragment = fragment(&self.page_select, html, "page list")?;

        let pages = self.values(fragment);
        if pages.is_empty() {
            return Err(ExtractError::MissingFragment("page numbers"));
        }

        Ok(pages)
    }

    fn image_url(&self, html: &str) -> Result<String, ExtractError> {
        fragment(&self.image, html, "page image").map(str::to_owned)
    }
}

/// The extension at the very end of `url`, dot included, or `""` if it has none.
///
/// Only ASCII letters count after the dot, so `1.jpg` gives `.jpg` while
/// `1.jpg?w=10` and `1.mp4` give nothing.
pub fn extension(url: &str) -> &str {
    let tail = url.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if tail.ends_with('.') {
        &url[tail.len() - 1..]
    } else {
        ""
    }
}
