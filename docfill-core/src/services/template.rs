use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

const TEMPLATE_EXT: &str = "docx";

/// Maps a template name such as `resume/basic` to `<dir>/resume/basic.docx`.
///
/// Names must be relative and may not climb out of `dir`.
pub fn resolve(dir: &Path, name: &str) -> Result<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidTemplatePath(name.to_string()));
    }

    let relative = Path::new(name);
    let all_normal = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !all_normal {
        return Err(Error::InvalidTemplatePath(name.to_string()));
    }

    let path = dir.join(format!("{name}.{TEMPLATE_EXT}"));
    if !path.is_file() {
        return Err(Error::TemplateNotFound(path));
    }

    Ok(path)
}
