pub(crate) mod ast;
pub(crate) mod error;
pub(crate) mod lexer;
pub(crate) mod ops;
pub(crate) mod parser;
pub(crate) mod vm;
