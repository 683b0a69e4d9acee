use super::{BlockStatement, Expression, Parser, Precedence, TokenKind};

impl Parser {
    pub(super) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        Some(expression)
    }

    // if (<cond>) { ... } with an optional else { ... }
    pub(super) fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        if !self.peek_token_is(TokenKind::Else) {
            return Some(Expression::If {
                condition: Box::new(condition),
                consequence,
                alternative: None,
            });
        }

        self.next_token();

        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }

        let alternative = self.parse_block_statement();

        Some(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative: Some(alternative),
        })
    }

    // Statements between '{' and '}'. A missing closing brace stops at
    // end of input instead of erroring on its own.
    pub(super) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();

        self.next_token();

        while !self.current_token_is(TokenKind::RightBrace) && !self.current_token_is(TokenKind::Eof)
        {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }

            self.next_token();
        }

        BlockStatement { statements }
    }
}
