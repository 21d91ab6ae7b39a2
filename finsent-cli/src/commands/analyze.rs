//! Analyze command implementation

use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_patterns, InputSource},
    output::DocumentWriter,
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::Args;
use finsent_core::{
    ClassifyStrategy, LexiconClassifier, OutputFormat, PipelineConfig, SentimentPipeline,
};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Sentences to analyze, separated by '|'
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob, '-' reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's default_format)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Lexicon file used instead of the embedded financial lexicon
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "FINSENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// How sentences are handed to the classifier
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Insert sentence text into HTML output without escaping
    #[arg(long)]
    pub no_escape: bool,

    /// Heading rendered above the HTML table
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output formats accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Text and Sentiment lines per sentence
    Text,
    /// Styled HTML table with sentiment badges
    Html,
    /// JSON array of classified sentences
    Json,
    /// Markdown table
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

/// Classifier strategies accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// One classifier call per sentence
    Sequential,
    /// One batch call per document
    Batched,
    /// Concurrent calls, output kept in input order
    Parallel,
}

impl From<StrategyArg> for ClassifyStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Sequential => ClassifyStrategy::Sequential,
            StrategyArg::Batched => ClassifyStrategy::Batched,
            StrategyArg::Parallel => ClassifyStrategy::Parallel,
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting sentiment analysis");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let classifier = self.build_classifier(&file_config)?;
        let format = self.output_format(&file_config);
        let pipeline_config = self.pipeline_config(&file_config)?;
        let pipeline = SentimentPipeline::with_config(classifier, pipeline_config);

        let sources = self.input_sources()?;
        log::info!("Analyzing {} document(s) as {format}", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(sources.len() as u64);

        // Render everything first so a failure leaves no partial output.
        let mut documents = Vec::with_capacity(sources.len());
        for source in &sources {
            let raw = source.read()?;
            let rendered = pipeline
                .render_as(&raw, format)
                .map_err(|e| CliError::AnalysisError(format!("{source}: {e}")))?;
            documents.push(rendered);
            progress.document_completed(&source.to_string());
        }
        progress.finish();

        let mut writer = DocumentWriter::create(self.output.as_deref())?;
        for document in &documents {
            writer.write_document(document)?;
        }
        writer.finish()?;

        if let Some(path) = &self.output {
            log::info!("Results written to {}", path.display());
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger installed earlier in the process wins.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }

    /// `--lexicon`, then the config file's lexicon, then the embedded one
    fn build_classifier(&self, file_config: &CliConfig) -> Result<LexiconClassifier> {
        let path = self
            .lexicon
            .as_ref()
            .or(file_config.classifier.lexicon.as_ref());

        match path {
            Some(path) => {
                log::info!("Loading lexicon from {}", path.display());
                LexiconClassifier::from_file(path)
                    .with_context(|| format!("Failed to load lexicon: {}", path.display()))
            }
            None => LexiconClassifier::financial().context("Failed to load embedded lexicon"),
        }
    }

    fn output_format(&self, file_config: &CliConfig) -> OutputFormat {
        self.format
            .map(OutputFormat::from)
            .unwrap_or(file_config.output.default_format)
    }

    fn pipeline_config(&self, file_config: &CliConfig) -> Result<PipelineConfig> {
        let strategy = self
            .strategy
            .map(ClassifyStrategy::from)
            .unwrap_or(file_config.classifier.strategy);
        let escape = !self.no_escape && file_config.output.escape_html;

        let mut builder = PipelineConfig::builder()
            .strategy(strategy)
            .format(self.output_format(file_config))
            .escape_html(escape);

        if let Some(title) = self.title.as_ref().or(file_config.output.title.as_ref()) {
            builder = builder.title(title.clone());
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// TEXT, then `--input` patterns, then piped stdin
    fn input_sources(&self) -> Result<Vec<InputSource>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputSource::Text(text.clone())]);
        }

        if !self.input.is_empty() {
            return resolve_patterns(&self.input);
        }

        if std::io::stdin().is_terminal() {
            return Err(CliError::NoInput.into());
        }

        Ok(vec![InputSource::Stdin])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            text: None,
            input: Vec::new(),
            output: None,
            format: None,
            lexicon: None,
            config: None,
            strategy: None,
            no_escape: false,
            title: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file_config = CliConfig::default();
        file_config.output.default_format = OutputFormat::Markdown;
        file_config.classifier.strategy = ClassifyStrategy::Batched;
        file_config.output.title = Some("From file".to_string());

        let mut args = args();
        assert_eq!(args.output_format(&file_config), OutputFormat::Markdown);

        args.format = Some(FormatArg::Html);
        args.strategy = Some(StrategyArg::Sequential);
        args.title = Some("From flag".to_string());

        let config = args.pipeline_config(&file_config).unwrap();
        assert_eq!(args.output_format(&file_config), OutputFormat::Html);
        assert_eq!(config.strategy, ClassifyStrategy::Sequential);
        assert_eq!(config.render.table.title.as_deref(), Some("From flag"));
    }

    #[test]
    fn test_escape_off_from_either_side() {
        let file_config = CliConfig::default();
        let mut args = args();
        assert!(args.pipeline_config(&file_config).unwrap().render.table.escape_text);

        args.no_escape = true;
        assert!(!args.pipeline_config(&file_config).unwrap().render.table.escape_text);

        let mut file_config = CliConfig::default();
        file_config.output.escape_html = false;
        args.no_escape = false;
        assert!(!args.pipeline_config(&file_config).unwrap().render.table.escape_text);
    }

    #[test]
    fn test_text_argument_is_single_source() {
        let mut args = args();
        args.text = Some("a|b".to_string());
        assert_eq!(
            args.input_sources().unwrap(),
            vec![InputSource::Text("a|b".to_string())]
        );
    }

    #[test]
    fn test_lexicon_flag_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tiny.toml");
        fs::write(
            &path,
            r#"
[metadata]
name = "tiny"

[terms.positive]
up = 0.5
"#,
        )
        .unwrap();

        let mut file_config = CliConfig::default();
        file_config.classifier.lexicon = Some(PathBuf::from("/nonexistent/lexicon.toml"));

        let mut args = args();
        args.lexicon = Some(path);
        let classifier = args.build_classifier(&file_config).unwrap();
        assert_eq!(finsent_core::Classifier::name(&classifier), "lexicon:tiny");
    }

    #[test]
    fn test_missing_lexicon_has_context() {
        let mut args = args();
        args.lexicon = Some(PathBuf::from("/nonexistent/lexicon.toml"));
        let err = args.build_classifier(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to load lexicon"));
    }

    #[test]
    fn test_value_enum_conversions() {
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        assert_eq!(
            ClassifyStrategy::from(StrategyArg::Parallel),
            ClassifyStrategy::Parallel
        );
    }
}
