pub mod fs;
pub mod prompt;
pub mod shell;
