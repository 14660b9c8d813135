use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        runtime::class::Class,
    },
};

/// Result type used by all parsing functions.
pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over the lexer's token cursor.
///
/// The parser resolves class names at parse time: class definitions are
/// registered as they are parsed, instantiation sites (`Name(...)`) look the
/// class up in the registry, and a parent in `class Child(Parent):` must
/// already be registered. It also tracks whether the cursor is inside a
/// method body, which is the only place `return` is allowed.
pub struct Parser<'a> {
    pub(crate) lexer:     &'a mut Lexer,
    pub(crate) classes:   HashMap<String, Rc<Class>>,
    pub(crate) in_method: bool,
}

impl<'a> Parser<'a> {
    /// Creates a parser reading from the given lexer.
    pub fn new(lexer: &'a mut Lexer) -> Self {
        Self { lexer,
               classes: HashMap::new(),
               in_method: false }
    }

    /// Parses a whole program into a compound statement.
    ///
    /// # Errors
    /// Returns a [`ParseError`] on malformed input.
    pub fn parse_program(&mut self) -> ParseResult<Stmt> {
        let mut statements = Vec::new();

        loop {
            self.skip_newlines();
            if *self.lexer.current_token() == Token::Eof {
                break;
            }
            statements.push(self.parse_statement()?);
        }

        Ok(Stmt::Compound(statements))
    }

    /// Consumes any run of `Newline` tokens at the cursor.
    pub(crate) fn skip_newlines(&mut self) {
        while *self.lexer.current_token() == Token::Newline {
            self.lexer.next_token();
        }
    }

    /// Checks the current token against `expected` and advances past it.
    pub(crate) fn consume(&mut self, expected: &Token) -> ParseResult<()> {
        self.lexer.expect(expected)?;
        self.lexer.next_token();
        Ok(())
    }
}
