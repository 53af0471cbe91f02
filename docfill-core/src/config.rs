use std::path::PathBuf;

use clap::Parser;

const DEFAULT_OUTPUT_NAME: &str = "Resume.docx";

/// Fills DOCX templates from JSON requests read line by line on stdin.
#[derive(Parser, Debug, Clone)]
#[command(name = "docfill-core")]
pub struct Config {
    /// Directory that template names are resolved against.
    #[arg(long, env = "DOCFILL_TEMPLATE_DIR", default_value = ".")]
    pub template_dir: PathBuf,

    /// File name reported for every rendered document.
    #[arg(long, env = "DOCFILL_OUTPUT_NAME", default_value = DEFAULT_OUTPUT_NAME)]
    pub output_name: String,

    /// When set, each rendered document is also written here.
    #[arg(long, env = "DOCFILL_SAVE_DIR")]
    pub save_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "DOCFILL_LOG", default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            template_dir: PathBuf::from("."),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            save_dir: None,
            log_level: "info".to_string(),
        }
    }
}
