pub mod bold;
