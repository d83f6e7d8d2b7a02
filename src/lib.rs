mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;

pub use block::Line;
pub use config::{Config, InlineConfig, ParagraphConfig};
pub use error::Error;
pub use html::{Converter, convert_lines};
pub use inline::format_inline;
pub use parser::classify;

use std::fs;
use std::path::Path;

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    convert_lines(markdown.lines(), config).concat()
}

/// Convert the markdown file at `input` and write the HTML to `output`.
///
/// Nothing is written unless the input exists and was read in full.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<(), Error> {
    if !input.exists() {
        return Err(Error::MissingInput(input.to_path_buf()));
    }

    let markdown = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let lines = convert_lines(markdown.lines(), config);

    fs::write(output, lines.concat()).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    log::info!(
        "converted {} -> {} ({} lines)",
        input.display(),
        output.display(),
        lines.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_file_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("README.md");
        let output = dir.path().join("README.html");
        fs::write(&input, "# Hi\n- x\n").unwrap();

        convert_file(&input, &output, &Config::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<h1>Hi</h1>\n<ul>\n<li>x</li>\n</ul>\n"
        );
    }

    #[test]
    fn convert_file_uses_configured_tags() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.html");
        fs::write(&input, "a **x** __y__\n").unwrap();

        let mut config = Config::default();
        config.inline.bold_tag = "strong".to_string();
        convert_file(&input, &output, &config).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<p>\na <strong>x</strong> <em>y</em>\n</p>\n"
        );
    }

    #[test]
    fn convert_file_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nope.md");
        let output = dir.path().join("nope.html");

        let err = convert_file(&input, &output, &Config::default()).unwrap_err();

        assert!(matches!(err, Error::MissingInput(_)));
        assert_eq!(err.to_string(), format!("Missing {}", input.display()));
        assert!(!output.exists());
    }
}
