use minipy::{
    error::LexerError,
    interpreter::lexer::{Lexer, Token},
};

fn tokens(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source).expect("tokenization must succeed");
    let mut result = vec![lexer.current_token().clone()];
    while *result.last().expect("the stream is never empty") != Token::Eof {
        result.push(lexer.next_token().clone());
    }
    result
}

#[test]
fn indented_program_token_stream() {
    let source = "x = 1\nif x:\n  print \"a\"\nprint \"b\"\n";
    let expected = vec![Token::Id("x".to_string()),
                        Token::Char('='),
                        Token::Number(1),
                        Token::Newline,
                        Token::If,
                        Token::Id("x".to_string()),
                        Token::Char(':'),
                        Token::Newline,
                        Token::Indent,
                        Token::Print,
                        Token::String("a".to_string()),
                        Token::Newline,
                        Token::Dedent,
                        Token::Print,
                        Token::String("b".to_string()),
                        Token::Newline,
                        Token::Eof];
    assert_eq!(tokens(source), expected);
}

#[test]
fn stream_ends_with_newline_dedents_eof() {
    // No trailing newline and two open indentation levels at end of input.
    let source = "if 1:\n  if 2:\n    print 3";
    let stream = tokens(source);

    let len = stream.len();
    assert_eq!(stream[len - 1], Token::Eof);
    assert_eq!(stream[len - 2], Token::Dedent);
    assert_eq!(stream[len - 3], Token::Dedent);
    assert_eq!(stream[len - 4], Token::Newline);
}

#[test]
fn indents_and_dedents_balance_over_every_prefix() {
    let source = "a = 1\nif a:\n  b = 2\n  if b:\n    c = 3\nd = 4\n";
    let stream = tokens(source);

    let mut depth = 0i64;
    for token in &stream {
        match token {
            Token::Indent => depth += 1,
            Token::Dedent => depth -= 1,
            _ => {},
        }
        assert!(depth >= 0, "dedent without a matching indent");
    }
    assert_eq!(depth, 0, "unbalanced indentation in {stream:?}");
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(tokens(""), vec![Token::Eof]);
}

#[test]
fn cursor_saturates_at_eof() {
    let mut lexer = Lexer::new("x\n").expect("tokenization must succeed");
    while *lexer.current_token() != Token::Eof {
        lexer.next_token();
    }
    assert_eq!(*lexer.next_token(), Token::Eof);
    assert_eq!(*lexer.next_token(), Token::Eof);
    assert_eq!(*lexer.current_token(), Token::Eof);
}

#[test]
fn missing_trailing_newline_is_synthesized() {
    assert_eq!(tokens("print 1"),
               vec![Token::Print, Token::Number(1), Token::Newline, Token::Eof]);
}

#[test]
fn blank_lines_produce_no_tokens() {
    let source = "\n\nx = 1\n\n\ny = 2\n";
    let expected = vec![Token::Id("x".to_string()),
                        Token::Char('='),
                        Token::Number(1),
                        Token::Newline,
                        Token::Id("y".to_string()),
                        Token::Char('='),
                        Token::Number(2),
                        Token::Newline,
                        Token::Eof];
    assert_eq!(tokens(source), expected);
}

#[test]
fn comments_consume_the_rest_of_the_line() {
    let source = "# leading comment\nx = 1 # trailing\ny = 2\n";
    let expected = vec![Token::Id("x".to_string()),
                        Token::Char('='),
                        Token::Number(1),
                        Token::Newline,
                        Token::Id("y".to_string()),
                        Token::Char('='),
                        Token::Number(2),
                        Token::Newline,
                        Token::Eof];
    assert_eq!(tokens(source), expected);
}

#[test]
fn hash_inside_a_string_is_not_a_comment() {
    let stream = tokens("x = 'a # b'\n");
    assert!(stream.contains(&Token::String("a # b".to_string())), "got {stream:?}");
}

#[test]
fn math_symbols_and_punctuation_are_char_tokens() {
    let source = "a = (1 + 2) * 3 / 4 - 5\n";
    let stream = tokens(source);
    for ch in ['=', '(', '+', ')', '*', '/', '-'] {
        assert!(stream.contains(&Token::Char(ch)), "missing Char({ch}) in {stream:?}");
    }
}

#[test]
fn keywords_and_operators() {
    let source = "class def if else and or not print return True False None\n";
    let expected = vec![Token::Class,
                        Token::Def,
                        Token::If,
                        Token::Else,
                        Token::And,
                        Token::Or,
                        Token::Not,
                        Token::Print,
                        Token::Return,
                        Token::True,
                        Token::False,
                        Token::None,
                        Token::Newline,
                        Token::Eof];
    assert_eq!(tokens(source), expected);

    let source = "a == b != c <= d >= e < f > g\n";
    let stream = tokens(source);
    for token in [Token::Eq,
                  Token::NotEq,
                  Token::LessOrEq,
                  Token::GreaterOrEq,
                  Token::Char('<'),
                  Token::Char('>')]
    {
        assert!(stream.contains(&token), "missing {token} in {stream:?}");
    }
}

#[test]
fn identifiers_are_not_keyword_prefixes() {
    let stream = tokens("classes = 1\nifx = 2\n_tmp = 3\n");
    assert!(stream.contains(&Token::Id("classes".to_string())));
    assert!(stream.contains(&Token::Id("ifx".to_string())));
    assert!(stream.contains(&Token::Id("_tmp".to_string())));
}

#[test]
fn string_literals_keep_spaces_and_drop_quotes() {
    let stream = tokens("m = 'two words'\nn = \"other's\"\n");
    assert!(stream.contains(&Token::String("two words".to_string())), "got {stream:?}");
    assert!(stream.contains(&Token::String("other's".to_string())), "got {stream:?}");
}

#[test]
fn escapes_decode_inside_strings() {
    let stream = tokens("s = 'a\\tb'\n");
    assert!(stream.contains(&Token::String("a\tb".to_string())), "got {stream:?}");

    // A doubled backslash survives the physical pass and is decoded against
    // the following character by the line pass.
    let stream = tokens("s = 'a\\\\nb'\n");
    assert!(stream.contains(&Token::String("a\nb".to_string())), "got {stream:?}");
}

#[test]
fn odd_indentation_is_accepted() {
    // Three leading spaces sit between one and two levels; the depth loops
    // settle on two indents, matched by two dedents at end of input.
    let stream = tokens("if 1:\n   print 2\n");
    let indents = stream.iter().filter(|t| **t == Token::Indent).count();
    let dedents = stream.iter().filter(|t| **t == Token::Dedent).count();
    assert_eq!(indents, 2);
    assert_eq!(dedents, 2);
}

#[test]
fn number_out_of_range_is_a_lexer_error() {
    match Lexer::new("x = 99999999999\n") {
        Err(LexerError::NumberOutOfRange { literal }) => {
            assert_eq!(literal, "99999999999");
        },
        other => panic!("expected NumberOutOfRange, got {other:?}"),
    }
}

#[test]
fn token_display_forms() {
    assert_eq!(Token::Number(42).to_string(), "Number{42}");
    assert_eq!(Token::Id("spam".to_string()).to_string(), "Id{spam}");
    assert_eq!(Token::String("hi".to_string()).to_string(), "String{hi}");
    assert_eq!(Token::Char('+').to_string(), "Char{+}");
    assert_eq!(Token::Class.to_string(), "Class");
    assert_eq!(Token::Indent.to_string(), "Indent");
    assert_eq!(Token::Eof.to_string(), "Eof");
}

#[test]
fn expect_checks_variant_and_payload() {
    let mut lexer = Lexer::new("x = 1\n").expect("tokenization must succeed");

    assert!(lexer.expect(&Token::Id("x".to_string())).is_ok());
    assert!(lexer.expect(&Token::Id("y".to_string())).is_err());
    assert!(lexer.expect(&Token::Print).is_err());
    assert_eq!(lexer.expect_id().expect("current is an identifier"), "x");

    assert!(lexer.expect_next(&Token::Char('=')).is_ok());
    assert!(lexer.expect_next_id().is_err());
}

#[test]
fn strings_may_span_physical_lines() {
    // A raw newline inside a literal does not terminate the logical line.
    let stream = tokens("s = 'a\nb'\nprint s\n");
    assert!(stream.contains(&Token::String("a\nb".to_string())), "got {stream:?}");
}
