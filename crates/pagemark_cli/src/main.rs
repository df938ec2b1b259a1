//! Pagemark CLI: download web pages and save their readable content as
//! Markdown files named after the URL slug.

mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pagemark_engine::{ExtractOptions, FetchSettings, PagePipeline};

/// Download web pages and convert their readable content to Markdown.
#[derive(Parser, Debug)]
#[command(name = "pagemark", version, about)]
struct Args {
    /// URLs to download, processed in order.
    #[arg(required = true)]
    urls: Vec<String>,

    /// Directory the Markdown files are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Render anchors as plain text instead of Markdown links.
    #[arg(long)]
    no_links: bool,

    /// Drop images from the output.
    #[arg(long)]
    no_images: bool,

    /// Render headings, emphasis and code as plain text.
    #[arg(long)]
    no_formatting: bool,

    /// Skip the frontmatter block.
    #[arg(long)]
    no_metadata: bool,

    /// Log pipeline stages to the terminal.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.verbose);

    let options = ExtractOptions {
        include_links: !args.no_links,
        include_images: !args.no_images,
        include_formatting: !args.no_formatting,
        with_metadata: !args.no_metadata,
    };
    let pipeline = PagePipeline::new(FetchSettings::default(), options, args.output_dir);

    // Strictly sequential: the run aborts at the first failing URL.
    for url in &args.urls {
        let fetched_utc = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        let outcome = pipeline
            .run(url, &fetched_utc)
            .await
            .with_context(|| format!("processing {url}"))?;
        println!("Wrote {}", outcome.path.display());
    }
    Ok(())
}
