use anyhow::{Context, Result};
use log::{error, info};
use slide_gen::{
    load_stories, ArchivePublisher, Batch, Credentials, OpenAiSummarizer, RenderConfig,
    RuleSplitter, StoryRenderer, Summarizer,
};
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        anyhow::bail!("Usage: {} <stories.csv> [limit]", args[0]);
    }
    let csv_path = &args[1];
    let limit: Option<usize> = args
        .get(2)
        .map(|raw| raw.parse())
        .transpose()
        .context("limit must be a number")?;

    info!("Loading stories from {csv_path}");
    let mut records = load_stories(csv_path)
        .map_err(|e| {
            error!("Cannot start batch: {e}");
            e
        })
        .context("story table failed validation")?;
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    info!("Loaded {} stories", records.len());

    let config = RenderConfig::from_env().context("incomplete render configuration")?;
    let credentials = Credentials::from_env().context("missing upload credentials")?;

    let renderer = StoryRenderer::new(&config).context("failed to load render assets")?;
    let summarizer = std::env::var("OPENAI_API_KEY").ok().map(OpenAiSummarizer::new);
    let mut publisher = ArchivePublisher::new(config.output_dir.join("posted"));

    let pacing = std::env::var("PACING_SECONDS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(30));

    let splitter = RuleSplitter;
    let summary = Batch {
        config: &config,
        renderer: &renderer,
        splitter: &splitter,
        summarizer: summarizer.as_ref().map(|s| s as &dyn Summarizer),
        publisher: &mut publisher,
        credentials: &credentials,
        output_dir: &config.output_dir,
        pacing,
    }
    .run(&records);

    info!(
        "Done: {} posted, {} failed, {} skipped",
        summary.succeeded, summary.failed, summary.skipped
    );
    Ok(())
}
