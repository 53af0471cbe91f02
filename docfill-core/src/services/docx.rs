//! DOCX rendering.
//!
//! A template is an ordinary `.docx` archive whose text carries Jinja
//! placeholders. Word tends to scatter a single `{{ NAME }}` over several
//! runs, so each XML part is cleaned up before rendering:
//!
//! - markup inside `{{ .. }}` and `{% .. %}` is dropped and entities undone;
//! - `{{r name }}` is read as `{{ name }}`;
//! - `{%p .. %}`, `{%tr .. %}`, `{%tc .. %}` and `{%r .. %}` swallow the
//!   paragraph, table row, cell or run that holds them, so loops can repeat
//!   whole paragraphs.
//!
//! Styled text is emitted as raw run XML. It closes the run holding the
//! placeholder and opens a fresh one for whatever template text follows.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::{Cursor, Read, Write};
use std::sync::LazyLock;

use minijinja::{AutoEscape, Environment, Value};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::{Captures, Regex};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};
use crate::model::context::{Context, ContextValue};
use crate::model::styled::StyledText;

pub const DOCUMENT_PART: &str = "word/document.xml";

static OPEN_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?:<[^>]*>)+([{%#])").expect("open split pattern is valid"));

static CLOSE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([}%#])(?:<[^>]*>)+\}").expect("close split pattern is valid"));

static TAG_BODY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{.*?\}\}|\{%.*?%\}").expect("tag body pattern is valid")
});

static XML_MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"));

static RUN_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{r\s+").expect("run var pattern is valid"));

// Hoisting order matters: rows before cells before paragraphs before runs.
static BLOCK_TAGS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [("tr", "w:tr"), ("tc", "w:tc"), ("p", "w:p"), ("r", "w:r")]
        .into_iter()
        .map(|(marker, element)| {
            let re = Regex::new(&format!(r"\{{%{marker}\s+(.*?)%\}}"))
                .expect("block tag pattern is valid");
            (re, element)
        })
        .collect()
});

/// Renders `template` (the bytes of a `.docx`) with `context`.
pub fn render(template: &[u8], context: &Context) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(template))?;
    if !archive.file_names().any(|n| n == DOCUMENT_PART) {
        return Err(Error::MissingPart(DOCUMENT_PART));
    }

    let env = environment();
    let vars = template_vars(context);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_string();

        if !is_template_part(&name) {
            writer.raw_copy_file(file)?;
            continue;
        }

        let mut xml = String::new();
        file.read_to_string(&mut xml)?;

        let rendered = render_part(&env, &name, &xml, &vars)?;
        writer.start_file(name, options)?;
        writer.write_all(rendered.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

fn is_template_part(name: &str) -> bool {
    if name == DOCUMENT_PART || name == "word/footnotes.xml" || name == "word/endnotes.xml" {
        return true;
    }
    (name.starts_with("word/header") || name.starts_with("word/footer")) && name.ends_with(".xml")
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env
}

fn render_part(env: &Environment<'_>, name: &str, xml: &str, vars: &Value) -> Result<String> {
    let source = preprocess(xml);
    let rendered = env.render_str(&source, vars)?;
    check_well_formed(name, &rendered)?;
    tracing::debug!(part = name, "rendered template part");
    Ok(rendered)
}

fn preprocess(xml: &str) -> String {
    let joined = join_split_tags(xml);
    let runs = RUN_VAR_RE.replace_all(&joined, "{{ ");
    hoist_block_tags(&runs)
}

fn join_split_tags(xml: &str) -> String {
    let xml = OPEN_SPLIT_RE.replace_all(xml, "{${1}");
    let xml = CLOSE_SPLIT_RE.replace_all(&xml, "${1}}");

    TAG_BODY_RE
        .replace_all(&xml, |caps: &Captures| clean_tag(&caps[0]))
        .into_owned()
}

fn clean_tag(tag: &str) -> String {
    let bare = XML_MARKUP_RE.replace_all(tag, "");
    let unescaped = quick_xml::escape::unescape(&bare).unwrap_or(Cow::Borrowed(bare.as_ref()));

    unescaped
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
}

fn hoist_block_tags(xml: &str) -> String {
    let mut xml = xml.to_string();

    for (re, element) in BLOCK_TAGS.iter() {
        loop {
            let Some((start, end, stmt)) = re.captures(&xml).and_then(|caps| {
                let whole = caps.get(0)?;
                Some((whole.start(), whole.end(), caps[1].trim().to_string()))
            }) else {
                break;
            };

            let span = match (
                find_open_before(&xml, element, start),
                find_close_after(&xml, element, end),
            ) {
                (Some(open), Some(close)) => open..close,
                _ => start..end,
            };

            xml.replace_range(span, &format!("{{% {stmt} %}}"));
        }
    }

    xml
}

fn find_open_before(xml: &str, element: &str, pos: usize) -> Option<usize> {
    let needle = format!("<{element}");
    let mut end = pos;

    while let Some(idx) = xml[..end].rfind(&needle) {
        // `<w:p` also prefixes `<w:pPr`
        let next = xml.as_bytes().get(idx + needle.len());
        if matches!(next, Some(b'>' | b' ' | b'\t' | b'\r' | b'\n')) {
            return Some(idx);
        }
        end = idx;
    }

    None
}

fn find_close_after(xml: &str, element: &str, pos: usize) -> Option<usize> {
    let needle = format!("</{element}>");
    xml[pos..].find(&needle).map(|i| pos + i + needle.len())
}

fn check_well_formed(part: &str, xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => return Ok(()),
            Ok(_) => {}
            Err(source) => {
                return Err(Error::Xml {
                    part: part.to_string(),
                    source,
                })
            }
        }
    }
}

fn template_vars(context: &Context) -> Value {
    let map: std::collections::BTreeMap<&str, Value> = context
        .iter()
        .map(|(k, v)| (k.as_str(), template_value(v)))
        .collect();
    Value::from_serialize(&map)
}

fn template_value(value: &ContextValue) -> Value {
    match value {
        ContextValue::Plain(v) => Value::from_serialize(v),
        ContextValue::Styled(text) => Value::from_safe_string(styled_xml(text)),
        ContextValue::List(items) => Value::from(items.iter().map(template_value).collect::<Vec<_>>()),
    }
}

/// Run XML for `text`, framed to sit inside an open `<w:r><w:t>`.
fn styled_xml(text: &StyledText) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::from("</w:t></w:r>");

    for run in text.runs() {
        out.push_str("<w:r><w:rPr>");
        let _ = write!(
            out,
            r#"<w:rFonts w:ascii="{f}" w:hAnsi="{f}" w:cs="{f}"/>"#,
            f = run.font
        );
        if run.bold {
            out.push_str("<w:b/><w:bCs/>");
        }
        let _ = write!(
            out,
            r#"<w:sz w:val="{s}"/><w:szCs w:val="{s}"/>"#,
            s = run.size
        );
        out.push_str(r#"</w:rPr><w:t xml:space="preserve">"#);
        let escaped = quick_xml::escape::escape(run.text.as_str());
        out.push_str(&escaped.replace('\n', r#"</w:t><w:br/><w:t xml:space="preserve">"#));
        out.push_str("</w:t></w:r>");
    }

    out.push_str(r#"<w:r><w:t xml:space="preserve">"#);
    out
}
