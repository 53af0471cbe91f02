use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::Result;
use crate::services::{docx, richtext, template};

#[derive(Debug, Serialize)]
pub struct GeneratedDocument {
    pub filename: String,
    pub docx_b64: String,
}

/// Resolves `template_name`, rewrites `context` and renders the document.
pub fn run(
    template_name: &str,
    context: &Map<String, Value>,
    config: &Config,
) -> Result<GeneratedDocument> {
    let path = template::resolve(&config.template_dir, template_name)?;
    let bytes = fs::read(&path)?;

    let rewritten = richtext::rewrite(context);
    let rendered = docx::render(&bytes, &rewritten)?;

    if let Some(dir) = &config.save_dir {
        write_atomic(&dir.join(&config.output_name), &rendered)?;
    }

    tracing::info!(
        template = %path.display(),
        fields = context.len(),
        bytes = rendered.len(),
        "rendered document"
    );

    Ok(GeneratedDocument {
        filename: config.output_name.clone(),
        docx_b64: STANDARD.encode(&rendered),
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&tmp, bytes)?;

    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "document".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
