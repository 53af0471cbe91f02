use serde::Serialize;

pub const FONT_FAMILY: &str = "Calibri";

/// Font size in half-points (22 = 11pt).
pub const FONT_SIZE: u32 = 22;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
    pub font: &'static str,
    pub size: u32,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    fn new(text: impl Into<String>, bold: bool) -> Self {
        StyledRun {
            text: text.into(),
            bold,
            font: FONT_FAMILY,
            size: FONT_SIZE,
        }
    }
}

/// Ordered runs produced from one marked-up string.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    runs: Vec<StyledRun>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a run. Empty text is dropped so no zero-length run is ever stored.
    pub fn push(&mut self, run: StyledRun) {
        if run.text.is_empty() {
            return;
        }
        self.runs.push(run);
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Visible text with run boundaries removed.
    pub fn plain_text(&self) -> String {
        let total: usize = self.runs.iter().map(|r| r.text.len()).sum();
        let mut out = String::with_capacity(total);
        for run in &self.runs {
            out.push_str(&run.text);
        }
        out
    }
}
