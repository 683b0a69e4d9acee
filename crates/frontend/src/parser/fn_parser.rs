use super::errors_parser::ParserError;
use super::{Expression, Parser, Precedence, TokenKind};

impl Parser {
    // fn(a, b) { ... }
    pub(super) fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::Function { parameters, body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RightParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.current_token.text.clone());

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.current_token.text.clone());
        }

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        Some(parameters)
    }

    // Function application, triggered by '(' after an already-parsed
    // expression. Only identifiers and inline function literals can be
    // applied, calling any other expression is not part of the language.
    pub(super) fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        let arguments = self.parse_call_arguments()?;

        match callee {
            Expression::Identifier { .. } | Expression::Function { .. } => {
                Some(Expression::Call {
                    callee: Box::new(callee),
                    arguments,
                })
            }
            _ => {
                self.errors.push(ParserError::InvalidCallTarget);
                None
            }
        }
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token_is(TokenKind::RightParen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();

            if let Some(argument) = self.parse_expression(Precedence::Lowest) {
                arguments.push(argument);
            }
        }

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        Some(arguments)
    }
}
