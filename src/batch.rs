use crate::caption::{resolve_caption, Summarizer};
use crate::config::{Credentials, RenderConfig};
use crate::error::SlideError;
use crate::publish::{publish_story, MediaId, Publisher};
use crate::story::{assemble_story, Renderer, StoryRecord};
use crate::tokenize::SentenceSplitter;
use log::{debug, error, info, warn};
use std::path::Path;
use std::time::Duration;

/// Counts aggregated across one batch run. Per-story errors never escape
/// the story boundary; only schema validation (checked before records
/// exist) can abort a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// One batch run: the collaborators plus pacing. Stories are processed
/// strictly in order, one at a time, each to completion before the next
/// begins.
pub struct Batch<'a> {
    pub config: &'a RenderConfig,
    pub renderer: &'a dyn Renderer,
    pub splitter: &'a dyn SentenceSplitter,
    pub summarizer: Option<&'a dyn Summarizer>,
    pub publisher: &'a mut dyn Publisher,
    pub credentials: &'a Credentials,
    pub output_dir: &'a Path,
    /// Pause between consecutive stories, so the upload collaborator is
    /// not hammered. A pacing knob, not a correctness requirement.
    pub pacing: Duration,
}

impl Batch<'_> {
    pub fn run(&mut self, records: &[StoryRecord]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for (index, record) in records.iter().enumerate() {
            if index > 0 && !self.pacing.is_zero() {
                debug!("waiting {:?} before the next story", self.pacing);
                std::thread::sleep(self.pacing);
            }

            info!("processing story {} of {}", index + 1, records.len());
            match self.post_story(index, record) {
                Ok(media) => {
                    info!("posted story {} (media id {})", index + 1, media.0);
                    summary.succeeded += 1;
                }
                Err(SlideError::EmptyInput) => {
                    warn!("story {}: no sentences found, skipping", index + 1);
                    summary.skipped += 1;
                }
                Err(e) => {
                    error!("story {} failed: {e}", index + 1);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "batch complete: {} posted, {} failed, {} skipped",
            summary.succeeded, summary.failed, summary.skipped
        );
        summary
    }

    /// Process a single story to completion. Fail-fast inside the story;
    /// the first error aborts it and is folded into its outcome by
    /// [`Batch::run`].
    fn post_story(&mut self, index: usize, record: &StoryRecord) -> Result<MediaId, SlideError> {
        let sentences = self.splitter.split_into_sentences(&record.narrative);
        if sentences.is_empty() {
            return Err(SlideError::EmptyInput);
        }
        debug!("story {}: {} sentences", index + 1, sentences.len());

        let caption = resolve_caption(record, self.summarizer, &self.config.cta_text);
        let story = assemble_story(self.config, record, &sentences, caption);

        let dir = self.output_dir.join(format!("story_{}", index + 1));
        let paths = self.renderer.render_story(&story, &dir)?;

        self.publisher.login(self.credentials)?;
        let result = publish_story(self.publisher, &paths, &story.caption);
        self.publisher.logout();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Story;
    use crate::tokenize::RuleSplitter;
    use std::path::PathBuf;

    /// Pretends every slide rendered, unless the story's caption carries
    /// the poison marker.
    struct FakeRenderer;

    impl Renderer for FakeRenderer {
        fn render_story(&self, story: &Story, dir: &Path) -> Result<Vec<PathBuf>, SlideError> {
            if story.caption.contains("[render-failure]") {
                return Err(SlideError::Configuration("poisoned render".into()));
            }
            Ok(story
                .slides
                .iter()
                .map(|slide| dir.join(slide.kind.file_name()))
                .collect())
        }
    }

    #[derive(Default)]
    struct RecordingPublisher {
        albums: usize,
        photos: usize,
        logins: usize,
        logouts: usize,
    }

    impl Publisher for RecordingPublisher {
        fn login(&mut self, _: &Credentials) -> Result<(), SlideError> {
            self.logins += 1;
            Ok(())
        }

        fn photo_upload(&mut self, _: &Path, _: &str) -> Result<MediaId, SlideError> {
            self.photos += 1;
            Ok(MediaId("photo".into()))
        }

        fn album_upload(&mut self, _: &[PathBuf], _: &str) -> Result<MediaId, SlideError> {
            self.albums += 1;
            Ok(MediaId("album".into()))
        }

        fn logout(&mut self) {
            self.logouts += 1;
        }
    }

    fn record(narrative: &str) -> StoryRecord {
        StoryRecord {
            location: "Kenya".into(),
            narrative: narrative.into(),
            title: None,
            caption: None,
        }
    }

    fn run(records: &[StoryRecord]) -> (BatchSummary, RecordingPublisher) {
        let config = RenderConfig::new("bg.png", "font.ttf");
        let credentials = Credentials {
            username: "user".into(),
            password: "pass".into(),
        };
        let mut publisher = RecordingPublisher::default();
        let summary = Batch {
            config: &config,
            renderer: &FakeRenderer,
            splitter: &RuleSplitter,
            summarizer: None,
            publisher: &mut publisher,
            credentials: &credentials,
            output_dir: Path::new("unused"),
            pacing: Duration::ZERO,
        }
        .run(records);
        (summary, publisher)
    }

    #[test]
    fn stories_post_as_albums() {
        let (summary, publisher) = run(&[record("One sentence. Two sentences.")]);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(publisher.albums, 1);
        assert_eq!(publisher.photos, 0);
        assert_eq!(publisher.logins, 1);
        assert_eq!(publisher.logouts, 1);
    }

    #[test]
    fn empty_narrative_is_skipped_without_touching_the_tally() {
        let (summary, publisher) = run(&[
            record(""),
            record("A real story. With sentences."),
        ]);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 0);
        // the skipped story never reached the publisher
        assert_eq!(publisher.logins, 1);
    }

    #[test]
    fn one_failing_story_does_not_stop_the_batch() {
        let (summary, publisher) = run(&[
            StoryRecord {
                caption: Some("[render-failure]".into()),
                ..record("Poisoned story. It will not render.")
            },
            record("Healthy story. It posts fine."),
        ]);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(publisher.albums, 1);
    }
}
