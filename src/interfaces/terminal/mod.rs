pub mod render;
pub mod repl;
