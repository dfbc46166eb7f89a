pub mod ast;
pub mod check;
pub mod dump;
pub mod script_loader;
pub mod tokens;

#[cfg(test)]
mod dump_tests;
