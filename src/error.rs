/// Lexical errors.
///
/// Defines the error type raised while tokenizing source code and by the
/// lexer's token-checking (`expect`) operations: unexpected token shapes or
/// values, and numeric literals that do not fit the integer type.
pub mod lexer_error;
/// Parsing errors.
///
/// Defines all error types that can occur while materializing the AST from
/// the token stream: unexpected tokens, undeclared classes, invalid call and
/// assignment targets, and misplaced statements.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: missing
/// names, type and arity mismatches, division by zero, and output-stream
/// failures.
pub mod runtime_error;

pub use lexer_error::LexerError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
