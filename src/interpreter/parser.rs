/// Parser state and program entry point.
///
/// Defines the `Parser` over the lexer cursor, the parse-time class
/// registry, and the top-level program loop.
pub mod core;
/// Expression parsing.
///
/// The precedence chain from `or` down to atoms, postfix field access and
/// method calls, class instantiation and the `str` builtin.
pub mod expression;
/// Statement parsing.
///
/// Class and method definitions, suites, `if`/`else`, `print`, `return`,
/// assignments and expression statements.
pub mod statement;
