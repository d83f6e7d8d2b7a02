use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::Parser;

const USAGE: &str = "Usage: md2html README.md README.html";

/// Every argument is a path, including ones starting with `-`; arguments
/// past the second are ignored.
#[derive(Parser)]
#[command(name = "md2html", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Input Markdown file
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Output HTML file
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    extra: Vec<OsString>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            log::debug!("argument parsing failed: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if !cli.extra.is_empty() {
        log::debug!("ignoring {} extra argument(s)", cli.extra.len());
    }

    let config = md2html::Config::compiled_default();

    if let Err(e) = md2html::convert_file(&cli.input, &cli.output, &config) {
        eprintln!("{e}");
        process::exit(1);
    }
}
