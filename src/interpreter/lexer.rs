use crate::error::LexerError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language: valued tokens
/// carry their payload, keyword and operator tokens are unit variants, and
/// `Newline`/`Indent`/`Dedent` encode the line and block structure of the
/// indentation-sensitive source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Number(i32),
    /// Identifier tokens; variable, class, method or field names.
    Id(String),
    /// A single free-standing character, such as `+`, `(` or `=`.
    Char(char),
    /// String literal tokens, stored without the delimiting quotes.
    String(String),
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// End of a logical line.
    Newline,
    /// `print`
    Print,
    /// Indentation increased by one level (two spaces).
    Indent,
    /// Indentation decreased by one level.
    Dedent,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,
    /// `None`
    None,
    /// `True`
    True,
    /// `False`
    False,
    /// End of the token stream.
    Eof,
}

impl Token {
    /// Returns the identifier name if this token is an [`Token::Id`].
    #[must_use]
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Self::Id(name) => Some(name),
            _ => Option::None,
        }
    }

    /// Returns the numeric payload if this token is a [`Token::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<i32> {
        match self {
            Self::Number(value) => Some(*value),
            _ => Option::None,
        }
    }

    /// Returns the string payload if this token is a [`Token::String`].
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => Option::None,
        }
    }

    /// Returns the character payload if this token is a [`Token::Char`].
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(value) => Some(*value),
            _ => Option::None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "Number{{{value}}}"),
            Self::Id(value) => write!(f, "Id{{{value}}}"),
            Self::Char(value) => write!(f, "Char{{{value}}}"),
            Self::String(value) => write!(f, "String{{{value}}}"),
            Self::Class => write!(f, "Class"),
            Self::Return => write!(f, "Return"),
            Self::If => write!(f, "If"),
            Self::Else => write!(f, "Else"),
            Self::Def => write!(f, "Def"),
            Self::Newline => write!(f, "Newline"),
            Self::Print => write!(f, "Print"),
            Self::Indent => write!(f, "Indent"),
            Self::Dedent => write!(f, "Dedent"),
            Self::And => write!(f, "And"),
            Self::Or => write!(f, "Or"),
            Self::Not => write!(f, "Not"),
            Self::Eq => write!(f, "Eq"),
            Self::NotEq => write!(f, "NotEq"),
            Self::LessOrEq => write!(f, "LessOrEq"),
            Self::GreaterOrEq => write!(f, "GreaterOrEq"),
            Self::None => write!(f, "None"),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Eof => write!(f, "Eof"),
        }
    }
}

/// Decodes a string escape character, returning the replacement.
///
/// Unrecognized escapes produce nothing; the pair is consumed silently.
const fn decode_escape(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => Option::None,
    }
}

const fn is_math_symbol(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

const fn is_punctuation(ch: char) -> bool {
    matches!(ch, ':' | '(' | ')' | ',' | '.')
}

/// Tokenizes source text into the stream the parser consumes.
///
/// The lexer eagerly consumes the entire input on construction and then
/// exposes a cursor over the produced tokens. Tokenization runs
/// line-at-a-time: a physical pass assembles each logical line (strings may
/// span physical lines, comments are stripped), and a line pass counts
/// leading spaces, synthesizes [`Token::Indent`]/[`Token::Dedent`] pairs and
/// splits the remainder into lexemes.
///
/// The produced stream always ends with `Newline` (unless the input produced
/// no tokens), one `Dedent` per open indentation level, and `Eof`. Once the
/// cursor reaches `Eof`, both cursor operations yield `Eof` indefinitely.
#[derive(Debug, Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    cursor: usize,
    depth:  usize,
}

impl Lexer {
    /// Tokenizes the complete source text.
    ///
    /// # Errors
    /// Returns a [`LexerError`] if a numeric literal does not fit into the
    /// language's integer type.
    pub fn new(source: &str) -> Result<Self, LexerError> {
        let mut lexer = Self { tokens: Vec::new(),
                               cursor: 0,
                               depth:  0, };
        lexer.tokenize(source)?;
        Ok(lexer)
    }

    /// Returns the token at the cursor.
    #[must_use]
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    /// Advances the cursor and returns the new current token.
    ///
    /// Once the cursor sits on the final `Eof` token, the cursor stays put
    /// and `Eof` is returned on every further call.
    pub fn next_token(&mut self) -> &Token {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        &self.tokens[self.cursor]
    }

    /// Checks that the current token equals `expected`, payload included.
    ///
    /// # Errors
    /// Returns a [`LexerError`] describing the mismatch.
    pub fn expect(&self, expected: &Token) -> Result<&Token, LexerError> {
        let current = self.current_token();
        if current == expected {
            Ok(current)
        } else {
            Err(LexerError::UnexpectedToken { expected: expected.clone(),
                                              found:    current.clone(), })
        }
    }

    /// Advances the cursor and checks the new current token against
    /// `expected`, payload included.
    ///
    /// # Errors
    /// Returns a [`LexerError`] describing the mismatch.
    pub fn expect_next(&mut self, expected: &Token) -> Result<&Token, LexerError> {
        self.next_token();
        self.expect(expected)
    }

    /// Checks that the current token is an identifier and returns its name.
    ///
    /// # Errors
    /// Returns a [`LexerError`] if the current token is not an identifier.
    pub fn expect_id(&self) -> Result<&str, LexerError> {
        match self.current_token() {
            Token::Id(name) => Ok(name),
            other => Err(LexerError::ExpectedIdentifier { found: other.clone() }),
        }
    }

    /// Advances the cursor and checks that the new current token is an
    /// identifier, returning its name.
    ///
    /// # Errors
    /// Returns a [`LexerError`] if the next token is not an identifier.
    pub fn expect_next_id(&mut self) -> Result<&str, LexerError> {
        self.next_token();
        match self.current_token() {
            Token::Id(name) => Ok(name),
            other => Err(LexerError::ExpectedIdentifier { found: other.clone() }),
        }
    }

    /// Physical pass: assembles logical lines from the character stream and
    /// feeds each to the line pass.
    fn tokenize(&mut self, source: &str) -> Result<(), LexerError> {
        let mut buffer = String::new();
        let mut in_string = false;
        let mut quote = '\0';
        let mut chars = source.chars();

        while let Some(ch) = chars.next() {
            if buffer.is_empty() && ch == '\n' {
                continue;
            }

            if in_string {
                if ch == '\\' {
                    if let Some(decoded) = chars.next().and_then(decode_escape) {
                        buffer.push(decoded);
                    }
                    continue;
                }
                buffer.push(ch);
                if ch == quote {
                    in_string = false;
                }
            } else if ch == '\'' || ch == '"' {
                in_string = true;
                quote = ch;
                buffer.push(ch);
            } else if ch == '\n' {
                self.consume_line(&buffer)?;
                self.tokens.push(Token::Newline);
                buffer.clear();
            } else if ch == '#' {
                if !buffer.is_empty() {
                    self.consume_line(&buffer)?;
                    self.tokens.push(Token::Newline);
                    buffer.clear();
                }
                for comment in chars.by_ref() {
                    if comment == '\n' {
                        break;
                    }
                }
            } else {
                buffer.push(ch);
            }
        }

        if !buffer.is_empty() {
            self.consume_line(&buffer)?;
        }

        if let Some(last) = self.tokens.last() {
            if *last != Token::Newline {
                self.tokens.push(Token::Newline);
            }
        }

        while self.depth > 0 {
            self.tokens.push(Token::Dedent);
            self.depth -= 1;
        }

        self.tokens.push(Token::Eof);
        Ok(())
    }

    /// Line pass: counts leading spaces, adjusts indentation and splits the
    /// line into lexemes.
    fn consume_line(&mut self, line: &str) -> Result<(), LexerError> {
        let chars: Vec<char> = line.chars().collect();
        let mut lexeme = String::new();
        let mut spaces = 0;
        let mut in_string = false;
        let mut quote = '\0';
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if in_string {
                if ch == '\\' {
                    if let Some(decoded) = chars.get(i + 1).copied().and_then(decode_escape) {
                        lexeme.push(decoded);
                    }
                    i += 2;
                    continue;
                }
                lexeme.push(ch);
                if ch == quote {
                    in_string = false;
                }
            } else if ch == '\'' || ch == '"' {
                if i + 1 < chars.len() && chars[i + 1] != '\\' {
                    in_string = true;
                    quote = ch;
                }
                lexeme.push(ch);
            } else if is_math_symbol(ch) {
                if !lexeme.is_empty() {
                    self.emit_lexeme(&lexeme)?;
                    lexeme.clear();
                }
                self.tokens.push(Token::Char(ch));
            } else if ch == ' ' && lexeme.is_empty() {
                spaces += 1;
            } else if ch == ' ' {
                self.emit_lexeme(&lexeme)?;
                lexeme.clear();
            } else if is_punctuation(ch) {
                if !lexeme.is_empty() {
                    self.emit_lexeme(&lexeme)?;
                    lexeme.clear();
                }
                self.tokens.push(Token::Char(ch));
            } else {
                if lexeme.is_empty() {
                    self.adjust_indentation(spaces, i);
                }
                lexeme.push(ch);
            }

            i += 1;
        }

        if !lexeme.is_empty() {
            self.emit_lexeme(&lexeme)?;
        }

        Ok(())
    }

    /// Emits `Indent`/`Dedent` tokens when the first lexeme character of a
    /// line sits on a different indentation level than the current one.
    ///
    /// `position` is the column of that character; the adjustment only fires
    /// when every preceding character on the line was a space. One level
    /// corresponds to two spaces.
    fn adjust_indentation(&mut self, spaces: usize, position: usize) {
        if spaces != position {
            return;
        }
        if position > self.depth * 2 {
            while position > self.depth * 2 {
                self.tokens.push(Token::Indent);
                self.depth += 1;
            }
        } else {
            while position < self.depth * 2 {
                self.tokens.push(Token::Dedent);
                self.depth -= 1;
            }
        }
    }

    /// Classifies a completed lexeme and appends the matching token(s).
    fn emit_lexeme(&mut self, lexeme: &str) -> Result<(), LexerError> {
        if lexeme.is_empty() {
            return Ok(());
        }

        let token = match lexeme {
            "class" => Token::Class,
            "def" => Token::Def,
            "True" => Token::True,
            "False" => Token::False,
            "None" => Token::None,
            "if" => Token::If,
            "else" => Token::Else,
            "and" => Token::And,
            "or" => Token::Or,
            "not" => Token::Not,
            "print" => Token::Print,
            "return" => Token::Return,
            "==" => Token::Eq,
            "!=" => Token::NotEq,
            "<=" => Token::LessOrEq,
            ">=" => Token::GreaterOrEq,
            _ => {
                // Only the first character decides whether this is an
                // identifier; the rest is taken as-is.
                let first = lexeme.chars().next().unwrap_or('\0');
                if first == '_' || first.is_ascii_alphabetic() {
                    Token::Id(lexeme.to_string())
                } else if lexeme.chars().all(|c| c.is_ascii_digit()) {
                    let value = lexeme.parse::<i32>().map_err(|_| {
                                    LexerError::NumberOutOfRange { literal: lexeme.to_string() }
                                })?;
                    Token::Number(value)
                } else if first == '"' || first == '\'' {
                    let count = lexeme.chars().count();
                    let value: String =
                        lexeme.chars().skip(1).take(count.saturating_sub(2)).collect();
                    Token::String(value)
                } else {
                    for ch in lexeme.chars() {
                        self.tokens.push(Token::Char(ch));
                    }
                    return Ok(());
                }
            },
        };

        self.tokens.push(token);
        Ok(())
    }
}
