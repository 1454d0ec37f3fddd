//! pdfocr — OCR a PDF into page-indexed JSON.
//!
//! `pdfocr <input.pdf> <output.json> [lang]`
//!
//! Runs the sequential pipeline: validate the input path, check the
//! Tesseract language pack, rasterize every page with pdfium, recognize
//! each page, write `{"page_1": ..., "page_2": ...}` as pretty-printed
//! UTF-8 JSON.

use clap::error::ErrorKind;
use clap::Parser;
use pdfocr_core::Result;
use pdfocr_pipeline::{OcrPipeline, PipelineConfig, DEFAULT_LANGUAGE};
use pdfocr_render::DEFAULT_DPI;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "pdfocr", version, about = "OCR a PDF into page-indexed JSON")]
struct Cli {
    /// Path to the source PDF
    input: PathBuf,

    /// Destination path for the JSON results
    output: PathBuf,

    /// OCR language code (Tesseract language pack)
    #[arg(default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// Rasterization density in dots per inch
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: u32,

    /// Recognize the Otsu-binarized page image instead of the original
    #[arg(long)]
    preprocess: bool,

    /// Exit non-zero when the pipeline fails (default keeps the historical
    /// behavior of reporting the error and exiting 0)
    #[arg(long)]
    strict_exit: bool,
}

/// How pipeline failures map to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitPolicy {
    /// Report the error and exit 0 (historical behavior)
    Compat,
    /// Exit 1 on any pipeline failure
    Strict,
}

/// The single decision point mapping a pipeline outcome to an exit code.
const fn exit_code(policy: ExitPolicy, result: &Result<()>) -> u8 {
    match (policy, result) {
        (_, Ok(())) => 0,
        (ExitPolicy::Compat, Err(_)) => 0,
        (ExitPolicy::Strict, Err(_)) => 1,
    }
}

fn main() -> ExitCode {
    // Argument errors print usage and exit 1; --help/--version keep clap's
    // normal handling.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            return ExitCode::from(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let policy = if cli.strict_exit {
        ExitPolicy::Strict
    } else {
        ExitPolicy::Compat
    };

    let config = PipelineConfig {
        language: cli.lang,
        recognize_binarized: cli.preprocess,
    };
    let pipeline = OcrPipeline::with_default_backends(config, cli.dpi);

    let result = pipeline.run(&cli.input, &cli.output);
    match &result {
        Ok(()) => println!("[DONE] results saved to {}", cli.output.display()),
        Err(e) => println!("[FATAL ERROR] {e}"),
    }

    ExitCode::from(exit_code(policy, &result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfocr_core::PdfOcrError;

    #[test]
    fn test_exit_code_policy() {
        let ok: Result<()> = Ok(());
        let err: Result<()> = Err(PdfOcrError::EmptyDocument);

        assert_eq!(exit_code(ExitPolicy::Compat, &ok), 0);
        assert_eq!(exit_code(ExitPolicy::Compat, &err), 0);
        assert_eq!(exit_code(ExitPolicy::Strict, &ok), 0);
        assert_eq!(exit_code(ExitPolicy::Strict, &err), 1);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["pdfocr", "in.pdf", "out.json"]).unwrap();
        assert_eq!(cli.lang, "rus");
        assert_eq!(cli.dpi, DEFAULT_DPI);
        assert!(!cli.preprocess);
        assert!(!cli.strict_exit);
    }

    #[test]
    fn test_cli_explicit_language() {
        let cli = Cli::try_parse_from(["pdfocr", "in.pdf", "out.json", "eng"]).unwrap();
        assert_eq!(cli.lang, "eng");
    }

    #[test]
    fn test_cli_rejects_missing_output() {
        assert!(Cli::try_parse_from(["pdfocr", "in.pdf"]).is_err());
    }
}
