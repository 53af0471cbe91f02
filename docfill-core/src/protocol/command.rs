#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Health,
    GenerateDocx,
    RewriteContext,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "health" | "ping" => Command::Health,
            "generate_docx" | "generate-docx" => Command::GenerateDocx,
            "rewrite_context" => Command::RewriteContext,
            _ => Command::Unknown,
        }
    }
}
