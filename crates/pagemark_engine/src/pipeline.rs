use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

use crate::decode::{decode_html, DecodeError};
use crate::extract::{Extractor, ReadabilityLikeExtractor};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::filename::slug_filename;
use crate::metadata::build_markdown_document;
use crate::persist::{MarkdownWriter, PersistError};
use crate::render::{ExtractOptions, MarkdownRenderer};
use crate::types::{FetchError, PageOutcome};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid url {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("failed to download {url}: {source}")]
    Download { url: String, source: FetchError },
    #[error("failed to decode {url}: {source}")]
    Decode { url: String, source: DecodeError },
    #[error("extraction returned empty content for {url}")]
    EmptyExtraction { url: String },
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// One page, start to finish: derive the filename, fetch, decode,
/// extract, render, and write. No retries; the first failure aborts the
/// run and nothing is written for that page.
pub struct PagePipeline {
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn Extractor>,
    renderer: MarkdownRenderer,
    options: ExtractOptions,
    writer: MarkdownWriter,
}

impl PagePipeline {
    pub fn new(settings: FetchSettings, options: ExtractOptions, output_dir: PathBuf) -> Self {
        Self {
            fetcher: Box::new(ReqwestFetcher::new(settings)),
            extractor: Box::new(ReadabilityLikeExtractor),
            renderer: MarkdownRenderer::new(options),
            options,
            writer: MarkdownWriter::new(output_dir),
        }
    }

    /// `fetched_utc` is stamped into the frontmatter; the caller decides
    /// the clock so runs stay reproducible under test.
    pub async fn run(&self, url: &str, fetched_utc: &str) -> Result<PageOutcome, PipelineError> {
        let filename = slug_filename(url).map_err(|err| PipelineError::InvalidUrl {
            url: url.to_string(),
            message: err.to_string(),
        })?;
        debug!("derived filename {filename} for {url}");

        let fetched = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|source| PipelineError::Download {
                url: url.to_string(),
                source,
            })?;
        debug!(
            "downloaded {} bytes from {}",
            fetched.metadata.byte_len, fetched.metadata.final_url
        );

        let decoded = decode_html(&fetched.bytes, fetched.metadata.content_type.as_deref())
            .map_err(|source| PipelineError::Decode {
                url: url.to_string(),
                source,
            })?;
        debug!("decoded as {}", decoded.encoding);

        let extracted = self.extractor.extract(&decoded.html);
        let body = self
            .renderer
            .render(&extracted.content_html, Some(&fetched.metadata.final_url));
        if body.trim().is_empty() {
            return Err(PipelineError::EmptyExtraction {
                url: url.to_string(),
            });
        }

        let document = build_markdown_document(
            url,
            extracted.title.as_deref(),
            &decoded.encoding,
            fetched_utc,
            &body,
            self.options.with_metadata,
        );
        let path = self.writer.write(&filename, &document)?;
        info!("wrote {} ({} bytes)", path.display(), document.len());

        Ok(PageOutcome {
            path,
            bytes_written: document.len() as u64,
            title: extracted.title,
        })
    }
}
