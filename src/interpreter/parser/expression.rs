use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{ComparisonOp, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        runtime::class::ClassInstance,
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_and()?;
        while *self.lexer.current_token() == Token::Or {
            self.lexer.next_token();
            let rhs = self.parse_and()?;
            lhs = Expr::Or { lhs: Box::new(lhs),
                             rhs: Box::new(rhs), };
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_not()?;
        while *self.lexer.current_token() == Token::And {
            self.lexer.next_token();
            let rhs = self.parse_not()?;
            lhs = Expr::And { lhs: Box::new(lhs),
                              rhs: Box::new(rhs), };
        }
        Ok(lhs)
    }

    fn parse_not(&mut self) -> ParseResult<Expr> {
        if *self.lexer.current_token() == Token::Not {
            self.lexer.next_token();
            let arg = self.parse_not()?;
            return Ok(Expr::Not { arg: Box::new(arg) });
        }
        self.parse_comparison()
    }

    /// Parses a comparison; at most one comparison operator per expression
    /// (comparisons do not chain).
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let lhs = self.parse_additive()?;

        let op = match self.lexer.current_token() {
            Token::Eq => ComparisonOp::Equal,
            Token::NotEq => ComparisonOp::NotEqual,
            Token::LessOrEq => ComparisonOp::LessOrEqual,
            Token::GreaterOrEq => ComparisonOp::GreaterOrEqual,
            Token::Char('<') => ComparisonOp::Less,
            Token::Char('>') => ComparisonOp::Greater,
            _ => return Ok(lhs),
        };
        self.lexer.next_token();

        let rhs = self.parse_additive()?;
        Ok(Expr::Comparison { op,
                              lhs: Box::new(lhs),
                              rhs: Box::new(rhs), })
    }

    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_term()?;
        loop {
            let add = match self.lexer.current_token() {
                Token::Char('+') => true,
                Token::Char('-') => false,
                _ => break,
            };
            self.lexer.next_token();
            let rhs = self.parse_term()?;
            lhs = if add {
                Expr::Add { lhs: Box::new(lhs),
                            rhs: Box::new(rhs), }
            } else {
                Expr::Sub { lhs: Box::new(lhs),
                            rhs: Box::new(rhs), }
            };
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_factor()?;
        loop {
            let mult = match self.lexer.current_token() {
                Token::Char('*') => true,
                Token::Char('/') => false,
                _ => break,
            };
            self.lexer.next_token();
            let rhs = self.parse_factor()?;
            lhs = if mult {
                Expr::Mult { lhs: Box::new(lhs),
                             rhs: Box::new(rhs), }
            } else {
                Expr::Div { lhs: Box::new(lhs),
                            rhs: Box::new(rhs), }
            };
        }
        Ok(lhs)
    }

    /// Parses an atom with its postfix chain of field accesses and method
    /// calls.
    ///
    /// `.name(` after any value is a method call. `.name` without a call
    /// extends a dotted variable path; it is rejected after anything that is
    /// not a named path, since field reads resolve by name.
    fn parse_factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_atom()?;

        while *self.lexer.current_token() == Token::Char('.') {
            let name = self.lexer.expect_next_id()?.to_string();
            self.lexer.next_token();

            if *self.lexer.current_token() == Token::Char('(') {
                let args = self.parse_call_args()?;
                expr = Expr::MethodCall { object: Box::new(expr),
                                          method: name,
                                          args };
            } else if let Expr::Variable { dotted_ids } = &mut expr {
                dotted_ids.push(name);
            } else {
                return Err(ParseError::InvalidFieldAccess);
            }
        }

        Ok(expr)
    }

    fn parse_atom(&mut self) -> ParseResult<Expr> {
        let token = self.lexer.current_token().clone();
        match token {
            Token::Number(value) => {
                self.lexer.next_token();
                Ok(Expr::NumericConst(value))
            },
            Token::String(value) => {
                self.lexer.next_token();
                Ok(Expr::StringConst(value))
            },
            Token::True => {
                self.lexer.next_token();
                Ok(Expr::BoolConst(true))
            },
            Token::False => {
                self.lexer.next_token();
                Ok(Expr::BoolConst(false))
            },
            Token::None => {
                self.lexer.next_token();
                Ok(Expr::NoneConst)
            },
            Token::Char('(') => {
                self.lexer.next_token();
                let expr = self.parse_expression()?;
                self.consume(&Token::Char(')'))?;
                Ok(expr)
            },
            Token::Id(name) => {
                self.lexer.next_token();
                if *self.lexer.current_token() == Token::Char('(') {
                    return self.parse_callable(name);
                }
                Ok(Expr::Variable { dotted_ids: vec![name] })
            },
            other => Err(ParseError::UnexpectedToken { found: other }),
        }
    }

    /// Parses a call on a bare name: instantiation of a registered class,
    /// or the `str` builtin.
    fn parse_callable(&mut self, name: String) -> ParseResult<Expr> {
        let args = self.parse_call_args()?;

        if let Some(class) = self.classes.get(&name) {
            let instance = Rc::new(RefCell::new(ClassInstance::new(Rc::clone(class))));
            return Ok(Expr::NewInstance { instance, args });
        }

        if name == "str" {
            if args.len() != 1 {
                return Err(ParseError::StringifyArgumentCount { found: args.len() });
            }
            let mut args = args;
            return Ok(Expr::Stringify { arg: Box::new(args.swap_remove(0)) });
        }

        Err(ParseError::UnknownCallable { name })
    }

    /// Parses `( expr , ... )`, cursor on the opening parenthesis.
    fn parse_call_args(&mut self) -> ParseResult<Vec<Expr>> {
        self.lexer.next_token();

        let mut args = Vec::new();
        if *self.lexer.current_token() != Token::Char(')') {
            loop {
                args.push(self.parse_expression()?);
                if *self.lexer.current_token() == Token::Char(',') {
                    self.lexer.next_token();
                } else {
                    break;
                }
            }
        }

        self.consume(&Token::Char(')'))?;
        Ok(args)
    }
}
