//! Framemap remaps video frame indices through a small text DSL.
//!
//! Two languages make up the crate:
//!
//! - **Mapping text**: line-oriented statements such as `5 10`, `[0 9] 100` or
//!   `[0 4] [10 14]` that fill a [`MappingTable`] of output frame → source
//!   frame entries. See [`MappingParser`].
//! - **Postfix expressions**: whitespace-separated RPN such as `x 2 * 1 +`,
//!   compiled once into a [`Program`] and evaluated over `f64` variables.
//!
//! The [`RangeTransform`] engine combines both: it reads ranges in mapping
//! syntax, runs them through an expression and prints the resulting ranges in
//! the same syntax.
//!
//! Parse failures carry a [`ParseErrorKind`] and the [`Position`] where
//! parsing stopped. Statements applied before a failure are kept.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod expression;
mod foundation;
mod mapping;

/// Serde-backed options for parsing and transforming.
pub mod config;
/// Range-transform engine and output helpers.
pub mod transform;

pub use crate::config::{FramemapConfig, ParseOptions, TransformOptions};
pub use crate::expression::ast::{Arena, Node, NodeId};
pub use crate::expression::error::ExprError;
pub use crate::expression::lexer::{Token, tokenize};
pub use crate::expression::ops::{MAX_ARITY, OP_TABLE, OpCode, OpDescriptor};
pub use crate::expression::parser::{Alphabet, Compiler, Program, TRANSFORM_ALPHABET};
pub use crate::expression::vm::eval_node;
pub use crate::foundation::core::{IntRange, MapIndex, Selector};
pub use crate::foundation::error::{FramemapError, FramemapResult};
pub use crate::mapping::error::{ParseError, ParseErrorKind, Position};
pub use crate::mapping::parser::MappingParser;
pub use crate::mapping::source::{LineSource, ReaderLines, StrLines};
pub use crate::mapping::table::MappingTable;
pub use crate::transform::{
    RangeTransform, format_ranges, merge, transform, transform_reader, transform_str,
};
