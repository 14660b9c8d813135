use crate::{error::LexerError, interpreter::lexer::Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while building the AST from the
/// token stream.
pub enum ParseError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// The token encountered.
        found: Token,
    },
    /// A class name was used before its definition.
    UnknownClass {
        /// The undeclared class name.
        name: String,
    },
    /// A call was made on a name that is neither a declared class nor the
    /// `str` builtin.
    UnknownCallable {
        /// The name in call position.
        name: String,
    },
    /// The builtin `str` was called with the wrong number of arguments.
    StringifyArgumentCount {
        /// The number of arguments supplied.
        found: usize,
    },
    /// The left-hand side of `=` is not a variable or field path.
    InvalidAssignmentTarget,
    /// Field access was applied to something other than a named value.
    InvalidFieldAccess,
    /// A `return` statement appeared outside of a method body.
    ReturnOutsideMethod,
    /// A token check failed inside the lexer.
    Lexer(LexerError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found } => {
                write!(f, "Unexpected token: {found}.")
            },
            Self::UnknownClass { name } => {
                write!(f, "Unknown class '{name}'.")
            },
            Self::UnknownCallable { name } => {
                write!(f, "'{name}' is not a class or builtin and cannot be called.")
            },
            Self::StringifyArgumentCount { found } => {
                write!(f, "str() takes exactly one argument, found {found}.")
            },
            Self::InvalidAssignmentTarget => {
                write!(f, "The left-hand side of an assignment must be a variable or field.")
            },
            Self::InvalidFieldAccess => {
                write!(f, "Field access is only possible on named variables.")
            },
            Self::ReturnOutsideMethod => {
                write!(f, "'return' is only allowed inside a method body.")
            },
            Self::Lexer(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexerError> for ParseError {
    fn from(e: LexerError) -> Self {
        Self::Lexer(e)
    }
}
