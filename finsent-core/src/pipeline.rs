//! Segment → aggregate → render, around an injected classifier

use crate::{
    aggregator::{self, ResultRow},
    category::Category,
    classifier::Classifier,
    config::{ClassifyStrategy, PipelineConfig},
    error::{PipelineError, Result},
    render::{render_table_with, render_text, OutputFormat},
    segmenter::segment,
};
use std::time::Instant;

/// Rows plus metadata for one invocation
#[derive(Debug, Clone)]
pub struct Analysis {
    /// One row per sentence, in input order
    pub rows: Vec<ResultRow>,
    /// Processing metadata
    pub metadata: AnalysisMetadata,
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisMetadata {
    /// Number of sentences classified
    pub sentence_count: usize,
    /// Rows per category
    pub positive: usize,
    /// Rows per category
    pub negative: usize,
    /// Rows per category
    pub neutral: usize,
    /// Name reported by the classifier
    pub classifier: String,
    /// Strategy that was used
    pub strategy: ClassifyStrategy,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

impl AnalysisMetadata {
    fn new(rows: &[ResultRow], classifier: &str, strategy: ClassifyStrategy, elapsed_ms: f64) -> Self {
        let count = |category: Category| rows.iter().filter(|r| r.category == category).count();
        Self {
            sentence_count: rows.len(),
            positive: count(Category::Positive),
            negative: count(Category::Negative),
            neutral: count(Category::Neutral),
            classifier: classifier.to_string(),
            strategy,
            processing_time_ms: elapsed_ms,
        }
    }
}

/// Sentiment pipeline owning a long-lived classifier
///
/// The classifier is built once by the caller and reused for every call.
/// [`new`](Self::new) and [`with_config`](Self::with_config) take a `Sync`
/// classifier and support every strategy. Classifiers with interior
/// mutability (`RefCell`, `Cell`) go through
/// [`single_threaded`](Self::single_threaded), which runs the sequential and
/// batched strategies and rejects the parallel one.
///
/// ```
/// use finsent_core::{LexiconClassifier, SentimentPipeline};
///
/// let pipeline = SentimentPipeline::new(LexiconClassifier::financial().unwrap());
/// let html = pipeline
///     .generate_table("growth is strong|there is a shortage of capital")
///     .unwrap();
/// assert!(html.contains("badge positive"));
/// assert!(html.contains("badge negative"));
/// ```
pub struct SentimentPipeline<C> {
    classifier: C,
    config: PipelineConfig,
    parallel: Option<ParallelAggregate<C>>,
}

type ParallelAggregate<C> = fn(&[String], &C) -> Result<Vec<ResultRow>>;

impl<C: Classifier + Sync> SentimentPipeline<C> {
    /// Create a pipeline with default configuration
    pub fn new(classifier: C) -> Self {
        Self::with_config(classifier, PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(classifier: C, config: PipelineConfig) -> Self {
        #[cfg(feature = "parallel")]
        let parallel = Some(aggregator::aggregate_parallel::<C> as ParallelAggregate<C>);
        #[cfg(not(feature = "parallel"))]
        let parallel: Option<ParallelAggregate<C>> = None;

        Self {
            classifier,
            config,
            parallel,
        }
    }
}

impl<C: Classifier> SentimentPipeline<C> {
    /// Create a pipeline around a classifier that cannot be shared across
    /// threads. The parallel strategy fails with a configuration error.
    pub fn single_threaded(classifier: C, config: PipelineConfig) -> Self {
        Self {
            classifier,
            config,
            parallel: None,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get the injected classifier
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Segment `raw` and classify every sentence
    pub fn analyze(&self, raw: &str) -> Result<Analysis> {
        let start = Instant::now();
        let sentences = segment(raw);
        let strategy = self.config.strategy;

        log::debug!(
            "classifying {} sentence(s) with {} ({strategy})",
            sentences.len(),
            self.classifier.name()
        );

        let rows = match strategy {
            ClassifyStrategy::Sequential => aggregator::aggregate(&sentences, &self.classifier)?,
            ClassifyStrategy::Batched => aggregator::aggregate_batch(&sentences, &self.classifier)?,
            ClassifyStrategy::Parallel => self.aggregate_parallel(&sentences)?,
        };

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        let metadata = AnalysisMetadata::new(&rows, self.classifier.name(), strategy, elapsed_ms);
        log::info!(
            "classified {} sentence(s): {} positive, {} negative, {} neutral in {:.2}ms",
            metadata.sentence_count,
            metadata.positive,
            metadata.negative,
            metadata.neutral,
            metadata.processing_time_ms
        );

        Ok(Analysis { rows, metadata })
    }

    fn aggregate_parallel(&self, sentences: &[String]) -> Result<Vec<ResultRow>> {
        match self.parallel {
            Some(aggregate) => aggregate(sentences, &self.classifier),
            None if cfg!(feature = "parallel") => Err(PipelineError::Config(
                "parallel strategy needs a Sync classifier; build the pipeline with `with_config`"
                    .to_string(),
            )),
            None => Err(PipelineError::Config(
                "parallel strategy requires the `parallel` feature".to_string(),
            )),
        }
    }

    /// Plain-text summary of `raw`
    pub fn generate_text(&self, raw: &str) -> Result<String> {
        Ok(render_text(&self.analyze(raw)?.rows))
    }

    /// Styled HTML table for `raw`
    pub fn generate_table(&self, raw: &str) -> Result<String> {
        Ok(render_table_with(
            &self.analyze(raw)?.rows,
            &self.config.render.table,
        ))
    }

    /// Render `raw` in the configured format
    pub fn render(&self, raw: &str) -> Result<String> {
        self.render_as(raw, self.config.format)
    }

    /// Render `raw` in `format`
    pub fn render_as(&self, raw: &str, format: OutputFormat) -> Result<String> {
        let analysis = self.analyze(raw)?;
        format.render(&analysis.rows, &self.config.render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{from_fn, Classification, ClassifierError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scripted() -> impl Classifier + Sync {
        from_fn(|sentence: &str| {
            if sentence.contains("strong") {
                Ok(Classification::new("Positive", 0.97))
            } else if sentence.contains("shortage") {
                Ok(Classification::new("Negative", 0.88))
            } else {
                Ok(Classification::new("Neutral", 0.5))
            }
        })
        .named("scripted")
    }

    #[test]
    fn test_analyze_metadata() {
        let pipeline = SentimentPipeline::new(scripted());
        let analysis = pipeline
            .analyze("growth is strong|there is a shortage of capital|")
            .unwrap();

        assert_eq!(analysis.rows.len(), 3);
        assert_eq!(analysis.metadata.sentence_count, 3);
        assert_eq!(analysis.metadata.positive, 1);
        assert_eq!(analysis.metadata.negative, 1);
        assert_eq!(analysis.metadata.neutral, 1);
        assert_eq!(analysis.metadata.classifier, "scripted");
        assert_eq!(analysis.metadata.strategy, ClassifyStrategy::Sequential);
    }

    #[test]
    fn test_strategies_agree() {
        let raw = "growth is strong| flat |there is a shortage of capital";
        let expected = SentimentPipeline::new(scripted()).analyze(raw).unwrap().rows;

        for strategy in [ClassifyStrategy::Batched, ClassifyStrategy::Parallel] {
            let config = PipelineConfig::builder().strategy(strategy).build().unwrap();
            let pipeline = SentimentPipeline::with_config(scripted(), config);
            assert_eq!(pipeline.analyze(raw).unwrap().rows, expected, "{strategy}");
        }
    }

    #[test]
    fn test_failure_returns_no_output() {
        let calls = AtomicUsize::new(0);
        let pipeline = SentimentPipeline::new(from_fn(|sentence: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            if sentence.is_empty() {
                Err(ClassifierError::Rejected("empty sentence".to_string()))
            } else {
                Ok(Classification::new("Positive", 0.9))
            }
        }));

        let err = pipeline.generate_text("fine||never classified").unwrap_err();
        assert_eq!(err.sentence_index(), Some(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_render_uses_configured_format() {
        let config = PipelineConfig::builder()
            .format(OutputFormat::Markdown)
            .build()
            .unwrap();
        let pipeline = SentimentPipeline::with_config(scripted(), config);

        let output = pipeline.render("growth is strong").unwrap();
        assert!(output.contains("| growth is strong | 0.9700 | Positive (positive) |"));

        let text = pipeline.render_as("growth is strong", OutputFormat::Text).unwrap();
        assert_eq!(text, pipeline.generate_text("growth is strong").unwrap());
    }

    #[test]
    fn test_table_honours_title() {
        let config = PipelineConfig::builder()
            .title("Financial Sentiment Analysis")
            .build()
            .unwrap();
        let pipeline = SentimentPipeline::with_config(scripted(), config);

        let html = pipeline.generate_table("growth is strong").unwrap();
        assert!(html.contains("<h2>Financial Sentiment Analysis</h2>"));
    }

    #[test]
    fn test_single_threaded_classifier_with_interior_mutability() {
        use std::cell::RefCell;

        let seen = RefCell::new(Vec::new());
        let classifier = from_fn(|sentence: &str| {
            seen.borrow_mut().push(sentence.to_string());
            Ok(Classification::new("Positive", 0.9))
        });

        for strategy in [ClassifyStrategy::Sequential, ClassifyStrategy::Batched] {
            let config = PipelineConfig::builder().strategy(strategy).build().unwrap();
            let pipeline = SentimentPipeline::single_threaded(&classifier, config);
            let analysis = pipeline.analyze("a|b").unwrap();
            assert_eq!(analysis.metadata.positive, 2, "{strategy}");
        }
        assert_eq!(*seen.borrow(), vec!["a", "b", "a", "b"]);
    }

    #[test]
    fn test_single_threaded_rejects_parallel() {
        use std::cell::Cell;

        let calls = Cell::new(0usize);
        let classifier = from_fn(|_: &str| {
            calls.set(calls.get() + 1);
            Ok(Classification::new("Neutral", 0.5))
        });
        let config = PipelineConfig {
            strategy: ClassifyStrategy::Parallel,
            ..PipelineConfig::default()
        };

        let pipeline = SentimentPipeline::single_threaded(classifier, config);
        let err = pipeline.analyze("a|b").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
        assert_eq!(calls.get(), 0);
    }
}
