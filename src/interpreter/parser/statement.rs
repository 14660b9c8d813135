use std::rc::Rc;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        runtime::class::{Class, Method},
    },
};

impl Parser<'_> {
    /// Parses a single statement at the cursor.
    ///
    /// Dispatches on the leading token: class definitions, `if`, `print`
    /// and `return` have dedicated forms; everything else is an assignment
    /// or an expression statement.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.lexer.current_token() {
            Token::Class => self.parse_class_definition(),
            Token::If => self.parse_if_statement(),
            Token::Print => self.parse_print_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_assignment_or_expression(),
        }
    }

    /// Parses `class Name [ ( Parent ) ] :` followed by an indented block
    /// of method definitions.
    ///
    /// The parent must already be declared. The finished class is registered
    /// so later instantiation sites can resolve it.
    fn parse_class_definition(&mut self) -> ParseResult<Stmt> {
        let name = self.lexer.expect_next_id()?.to_string();
        self.lexer.next_token();

        let parent = if *self.lexer.current_token() == Token::Char('(') {
            let parent_name = self.lexer.expect_next_id()?.to_string();
            self.lexer.expect_next(&Token::Char(')'))?;
            self.lexer.next_token();
            let class = self.classes
                            .get(&parent_name)
                            .cloned()
                            .ok_or(ParseError::UnknownClass { name: parent_name })?;
            Some(class)
        } else {
            None
        };

        self.consume(&Token::Char(':'))?;
        self.consume(&Token::Newline)?;
        self.consume(&Token::Indent)?;

        let mut methods = Vec::new();
        loop {
            self.skip_newlines();
            if *self.lexer.current_token() == Token::Dedent {
                self.lexer.next_token();
                break;
            }
            self.lexer.expect(&Token::Def)?;
            methods.push(self.parse_method()?);
        }

        let class = Rc::new(Class::new(name.clone(), methods, parent));
        self.classes.insert(name, Rc::clone(&class));
        Ok(Stmt::ClassDefinition { class })
    }

    /// Parses `def name ( params ) :` and the method body suite.
    ///
    /// A leading `self` parameter names the implicit receiver and is not
    /// part of the formal parameter list.
    fn parse_method(&mut self) -> ParseResult<Method> {
        let name = self.lexer.expect_next_id()?.to_string();
        self.lexer.expect_next(&Token::Char('('))?;
        self.lexer.next_token();

        let mut formal_params = Vec::new();
        if *self.lexer.current_token() != Token::Char(')') {
            loop {
                formal_params.push(self.lexer.expect_id()?.to_string());
                self.lexer.next_token();
                if *self.lexer.current_token() == Token::Char(',') {
                    self.lexer.next_token();
                } else {
                    break;
                }
            }
        }
        self.consume(&Token::Char(')'))?;
        self.consume(&Token::Char(':'))?;

        if formal_params.first().map(String::as_str) == Some("self") {
            formal_params.remove(0);
        }

        let was_in_method = self.in_method;
        self.in_method = true;
        let body = self.parse_suite();
        self.in_method = was_in_method;

        Ok(Method { name,
                    formal_params,
                    body: Rc::new(Stmt::MethodBody { body: Box::new(body?) }) })
    }

    /// Parses an indented suite: `NEWLINE INDENT statement+ DEDENT`.
    fn parse_suite(&mut self) -> ParseResult<Stmt> {
        self.consume(&Token::Newline)?;
        self.consume(&Token::Indent)?;

        let mut statements = Vec::new();
        loop {
            self.skip_newlines();
            match self.lexer.current_token() {
                Token::Dedent => {
                    self.lexer.next_token();
                    break;
                },
                Token::Eof => {
                    return Err(ParseError::UnexpectedToken { found: Token::Eof });
                },
                _ => statements.push(self.parse_statement()?),
            }
        }

        Ok(Stmt::Compound(statements))
    }

    /// Parses `if expr :` with its suite and an optional `else :` suite.
    fn parse_if_statement(&mut self) -> ParseResult<Stmt> {
        self.lexer.next_token();
        let condition = self.parse_expression()?;
        self.consume(&Token::Char(':'))?;
        let then_body = Box::new(self.parse_suite()?);

        let else_body = if *self.lexer.current_token() == Token::Else {
            self.lexer.expect_next(&Token::Char(':'))?;
            self.lexer.next_token();
            Some(Box::new(self.parse_suite()?))
        } else {
            None
        };

        Ok(Stmt::IfElse { condition,
                          then_body,
                          else_body })
    }

    /// Parses `print` with a possibly empty comma-separated argument list.
    fn parse_print_statement(&mut self) -> ParseResult<Stmt> {
        self.lexer.next_token();

        let mut args = Vec::new();
        if *self.lexer.current_token() != Token::Newline {
            loop {
                args.push(self.parse_expression()?);
                if *self.lexer.current_token() == Token::Char(',') {
                    self.lexer.next_token();
                } else {
                    break;
                }
            }
        }

        self.consume(&Token::Newline)?;
        Ok(Stmt::Print { args })
    }

    /// Parses `return` with an optional value; a bare `return` yields
    /// `None`.
    fn parse_return_statement(&mut self) -> ParseResult<Stmt> {
        if !self.in_method {
            return Err(ParseError::ReturnOutsideMethod);
        }
        self.lexer.next_token();

        let value = if *self.lexer.current_token() == Token::Newline {
            Expr::NoneConst
        } else {
            self.parse_expression()?
        };

        self.consume(&Token::Newline)?;
        Ok(Stmt::Return { value })
    }

    /// Parses an assignment or an expression statement.
    ///
    /// The line is parsed as an expression first; a following `=` turns a
    /// variable path into an assignment target. A single name assigns the
    /// activation closure; a dotted path assigns a field on the instance
    /// named by everything but the last component.
    fn parse_assignment_or_expression(&mut self) -> ParseResult<Stmt> {
        let expr = self.parse_expression()?;

        if *self.lexer.current_token() != Token::Char('=') {
            self.consume(&Token::Newline)?;
            return Ok(Stmt::Expression(expr));
        }

        let Expr::Variable { mut dotted_ids } = expr else {
            return Err(ParseError::InvalidAssignmentTarget);
        };
        self.lexer.next_token();
        let value = self.parse_expression()?;
        self.consume(&Token::Newline)?;

        if dotted_ids.len() == 1 {
            let var = dotted_ids.swap_remove(0);
            Ok(Stmt::Assignment { var, value })
        } else {
            let field_name = dotted_ids.pop().ok_or(ParseError::InvalidAssignmentTarget)?;
            Ok(Stmt::FieldAssignment { object_path: dotted_ids,
                                       field_name,
                                       value })
        }
    }
}
