pub mod docx;
pub mod generate;
pub mod richtext;
pub mod template;
