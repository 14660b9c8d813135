//! # minipy
//!
//! minipy is an interpreter for a small indentation-sensitive
//! object-oriented scripting language, written in Rust. The language offers
//! classes with single inheritance, methods and fields, integer, string,
//! boolean and `None` values, arithmetic and comparison operators,
//! `if`/`else`, `print` and `return`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    evaluator::core::Unwind,
    lexer::Lexer,
    parser::core::Parser,
    runtime::object::{Closure, SimpleContext},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and executed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Ties instantiation sites to the instances they own.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// code. It standardizes error reporting and carries the offending tokens,
/// names and operations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the runtime
/// object model and all supporting infrastructure to provide a complete
/// interpreter for source code. It exposes the public API for executing
/// programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and runtime.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Executes a complete program, writing interpreted output to `output`.
///
/// The source is tokenized and parsed up front; the resulting program then
/// runs against a fresh global closure. Everything the program prints goes
/// to `output`.
///
/// # Errors
/// Returns an error if tokenization, parsing or execution fails.
///
/// # Examples
/// ```
/// use minipy::run_program;
///
/// let mut output = Vec::new();
/// run_program("print 2 + 2\n", &mut output).unwrap();
/// assert_eq!(output, b"4\n");
///
/// // An intentional error: 'x' is not defined.
/// let mut output = Vec::new();
/// assert!(run_program("print x\n", &mut output).is_err());
/// ```
pub fn run_program(source: &str,
                   output: &mut dyn Write)
                   -> Result<(), Box<dyn std::error::Error>> {
    let mut lexer = Lexer::new(source)?;
    let program = Parser::new(&mut lexer).parse_program()?;

    let mut globals = Closure::new();
    let mut context = SimpleContext::new(output);

    match program.execute(&mut globals, &mut context) {
        Ok(_) => Ok(()),
        Err(Unwind::Error(e)) => Err(Box::new(e)),
        Err(Unwind::Return(_)) => {
            unreachable!("return statements are confined to method bodies by the parser")
        },
    }
}
