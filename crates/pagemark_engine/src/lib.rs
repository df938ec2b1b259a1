//! Pagemark engine: fetch a web page, extract its readable content, and
//! persist it as a Markdown file named after the URL slug.
mod decode;
mod extract;
mod fetch;
mod filename;
mod metadata;
mod persist;
mod pipeline;
mod render;
mod types;

pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use extract::{ExtractedContent, Extractor, ReadabilityLikeExtractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::slug_filename;
pub use metadata::build_markdown_document;
pub use persist::{ensure_output_dir, MarkdownWriter, PersistError};
pub use pipeline::{PagePipeline, PipelineError};
pub use render::{ExtractOptions, MarkdownRenderer};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, PageOutcome};
