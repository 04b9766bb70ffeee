// Command-line front end
// Argument parsing, command dispatch and localized report rendering

use crate::api::{detect_image, detect_text, list_languages};
use crate::models::{
    ImageDetectResponse, ImageFormat, ImageMethod, ImageSample, LanguageInfo, TextDetectRequest,
    TextDetectResponse,
};
use crate::services::config_store::{AppConfig, ConfigStore};
use crate::services::i18n::{translate, UiLanguage};
use crate::services::PlaceholderCnn;
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "content-detector")]
#[command(
    author,
    version,
    about = "Heuristic detection of AI-generated text and images"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config directory (defaults to the platform config dir)
    #[arg(long, global = true, env = "CONTENT_DETECTOR_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text from an argument, a file or stdin
    Text {
        /// Text to analyze
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Report language: en or hi
        #[arg(long, value_parser = parse_ui_language)]
        ui_lang: Option<UiLanguage>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze a decoded image
    Image {
        /// Width in pixels
        #[arg(long)]
        width: u32,

        /// Height in pixels
        #[arg(long)]
        height: u32,

        /// Source format: jpeg, png or other
        #[arg(long, value_parser = parse_format)]
        format: Option<ImageFormat>,

        /// File with packed 8-bit RGB pixels (width * height * 3 bytes)
        #[arg(long)]
        pixels: Option<PathBuf>,

        /// Method: heuristic or deep-learning
        #[arg(short, long, value_parser = parse_method)]
        method: Option<ImageMethod>,

        /// Seed for the placeholder classifier weights
        #[arg(long)]
        seed: Option<u64>,

        /// Report language: en or hi
        #[arg(long, value_parser = parse_ui_language)]
        ui_lang: Option<UiLanguage>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the languages the detector recognises
    Languages {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change persisted settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set the default report language
    SetUiLanguage {
        #[arg(value_parser = parse_ui_language)]
        lang: UiLanguage,
    },
}

fn parse_ui_language(s: &str) -> Result<UiLanguage, String> {
    s.parse()
}

fn parse_format(s: &str) -> Result<ImageFormat, String> {
    s.parse()
}

fn parse_method(s: &str) -> Result<ImageMethod, String> {
    s.parse()
}

fn open_store(config_dir: Option<PathBuf>) -> anyhow::Result<ConfigStore> {
    match config_dir {
        Some(dir) => Ok(ConfigStore::new(dir)),
        None => Ok(ConfigStore::open_default()?),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

/// Run a parsed command, printing its result to stdout
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let store = open_store(cli.config_dir)?;
    let config = store
        .load()
        .with_context(|| format!("Failed to load {}", store.config_file().display()))?;

    match cli.command {
        Commands::Text {
            text,
            file,
            ui_lang,
            json,
        } => {
            let ui = ui_lang.unwrap_or(config.ui_language);
            let request = TextDetectRequest {
                text: read_input(text, file)?,
                ui_language: ui,
            };
            let response = detect_text(request).map_err(anyhow::Error::msg)?;
            if json || config.output.json {
                println!("{}", to_json(&response, config.output.pretty)?);
            } else {
                print!("{}", render_text_report(&response, ui));
            }
        }
        Commands::Image {
            width,
            height,
            format,
            pixels,
            method,
            seed,
            ui_lang,
            json,
        } => {
            let ui = ui_lang.unwrap_or(config.ui_language);
            let method = method.unwrap_or(config.image.default_method);
            let pixels = match pixels {
                Some(path) => Some(
                    std::fs::read(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                ),
                None => None,
            };
            let image = ImageSample::new(width, height, format, pixels)?;
            let model = match seed.or(config.image.model_seed) {
                Some(seed) => PlaceholderCnn::with_seed(seed),
                None => PlaceholderCnn::random(),
            };
            let response = detect_image(&image, method, ui, &model);
            if json || config.output.json {
                println!("{}", to_json(&response, config.output.pretty)?);
            } else {
                print!("{}", render_image_report(&response, ui));
            }
        }
        Commands::Languages { json } => {
            let languages = list_languages();
            if json || config.output.json {
                println!("{}", to_json(&languages, config.output.pretty)?);
            } else {
                print!("{}", render_languages(&languages, config.ui_language));
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("# {}", store.config_file().display());
                println!("{}", to_json(&config, true)?);
            }
            ConfigAction::SetUiLanguage { lang } => {
                let updated: AppConfig = store.set_ui_language(lang)?;
                info!(ui_language = %updated.ui_language, "[CONFIG] ui language saved");
                println!("{}: {}", translate(lang, "language"), lang.native_name());
            }
        },
    }

    Ok(())
}

fn percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

fn push_list(out: &mut String, items: &[String], empty: &str) {
    if items.is_empty() {
        let _ = writeln!(out, "  - {}", empty);
    }
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

pub fn render_text_report(resp: &TextDetectResponse, ui: UiLanguage) -> String {
    let t = |key: &'static str| translate(ui, key);
    let insights = &resp.insights;
    let metrics = &insights.advanced_metrics;
    let stats = &insights.basic_stats;
    let mut out = String::new();

    for warning in &resp.warnings {
        let _ = writeln!(out, "! {}", warning);
    }
    let _ = writeln!(out, "{}", resp.verdict_label);
    let _ = writeln!(out, "{}", resp.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", t("ai_generated"), percent(resp.ai_probability));
    let _ = writeln!(out, "{}: {}", t("human_written"), percent(resp.human_probability));
    let _ = writeln!(out, "{}: {}", t("confidence"), percent(resp.confidence));
    let _ = writeln!(
        out,
        "{}: {} ({})",
        t("detected_language"),
        insights.language.detected,
        insights.language.code
    );

    let _ = writeln!(out, "\n{}", t("advanced_metrics"));
    let _ = writeln!(out, "  {}: {:.2} {}", t("perplexity"), metrics.perplexity, resp.metric_labels.perplexity);
    let _ = writeln!(out, "  {}: {:.3} {}", t("burstiness"), metrics.burstiness, resp.metric_labels.burstiness);
    let _ = writeln!(
        out,
        "  {}: {:.3} {}",
        t("complexity"),
        metrics.syntactic_complexity,
        resp.metric_labels.syntactic_complexity
    );

    let _ = writeln!(out, "\n{}", t("ai_indicators"));
    push_list(&mut out, &insights.ai_indicators, t("no_ai_indicators"));
    let _ = writeln!(out, "{}", t("human_indicators"));
    push_list(&mut out, &insights.human_indicators, t("limited_human_patterns"));

    if !insights.language_patterns.is_empty() {
        let _ = writeln!(out, "\n{}", t("language_patterns"));
        for (category, count) in &insights.language_patterns {
            let _ = writeln!(out, "  {}: {}", category.as_str(), count);
        }
    }

    let _ = writeln!(out, "\n{}", t("text_statistics"));
    let _ = writeln!(out, "  {}: {}", t("characters"), stats.characters);
    let _ = writeln!(out, "  {}: {}", t("words"), stats.words);
    let _ = writeln!(out, "  {}: {}", t("sentences"), stats.sentences);
    let _ = writeln!(out, "  {}: {:.1}", t("avg_sentence_length"), stats.avg_sentence_length);
    out
}

pub fn render_image_report(resp: &ImageDetectResponse, ui: UiLanguage) -> String {
    let t = |key: &'static str| translate(ui, key);
    let report = &resp.report;
    let mut out = String::new();

    let _ = writeln!(out, "{}", resp.verdict_label);
    let _ = writeln!(out, "{}", resp.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", t("ai_generated"), percent(resp.ai_probability));
    let _ = writeln!(out, "{}: {}", t("real_photo"), percent(resp.real_probability));
    let _ = writeln!(out, "{}: {}", t("confidence"), percent(resp.confidence));

    let _ = writeln!(out, "\n{}", t("detailed_analysis"));
    let _ = writeln!(out, "  {}: {}", t("method"), report.method);
    let _ = writeln!(out, "  {}: {}x{}", t("image_size"), report.width, report.height);
    let _ = writeln!(out, "  {}: {:.2}", t("aspect_ratio"), report.aspect_ratio);
    let _ = writeln!(out, "  {}: {}", t("analysis"), report.analysis);
    out
}

pub fn render_languages(languages: &[LanguageInfo], ui: UiLanguage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", translate(ui, "supported_languages"));
    for lang in languages {
        let _ = writeln!(out, "  {}  {}", lang.code, lang.detected);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_command() {
        let cli = Cli::try_parse_from([
            "content-detector",
            "text",
            "--text",
            "hello there",
            "--ui-lang",
            "hi",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Text {
                text, ui_lang, json, ..
            } => {
                assert_eq!(text.as_deref(), Some("hello there"));
                assert_eq!(ui_lang, Some(UiLanguage::Hi));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let res = Cli::try_parse_from([
            "content-detector",
            "text",
            "--text",
            "a",
            "--file",
            "b.txt",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_image_command() {
        let cli = Cli::try_parse_from([
            "content-detector",
            "image",
            "--width",
            "1024",
            "--height",
            "1024",
            "--format",
            "jpg",
            "--method",
            "deep-learning",
        ])
        .unwrap();
        match cli.command {
            Commands::Image {
                width,
                format,
                method,
                ..
            } => {
                assert_eq!(width, 1024);
                assert_eq!(format, Some(ImageFormat::Jpeg));
                assert_eq!(method, Some(ImageMethod::DeepLearning));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_ui_language_is_rejected() {
        let res = Cli::try_parse_from(["content-detector", "config", "set-ui-language", "fr"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_text_report_uses_ui_language() {
        let text = "The system is good. The system is good. The system is good. The system is good.";
        let resp = detect_text(TextDetectRequest {
            text: text.to_string(),
            ui_language: UiLanguage::Hi,
        })
        .unwrap();
        let report = render_text_report(&resp, UiLanguage::Hi);
        assert!(report.contains("शब्द: 16"));
        assert!(report.contains(&resp.verdict_label));
        assert!(report.contains("English (en)"));
    }

    #[test]
    fn test_image_report_lists_dimensions() {
        let img = ImageSample::new(800, 600, Some(ImageFormat::Png), None).unwrap();
        let resp = detect_image(&img, ImageMethod::Heuristic, UiLanguage::En, &PlaceholderCnn::default());
        let report = render_image_report(&resp, UiLanguage::En);
        assert!(report.contains("Image Size: 800x600"));
        assert!(report.contains("Aspect Ratio: 1.33"));
    }

    #[test]
    fn test_execute_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let dir_arg = dir.path().to_string_lossy().to_string();
        let cli = Cli::try_parse_from([
            "content-detector",
            "--config-dir",
            dir_arg.as_str(),
            "config",
            "set-ui-language",
            "hi",
        ])
        .unwrap();
        execute(cli).unwrap();

        let store = ConfigStore::new(dir.path().to_path_buf());
        assert_eq!(store.load().unwrap().ui_language, UiLanguage::Hi);
    }
}
