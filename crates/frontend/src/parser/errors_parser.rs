use thiserror::Error;

use super::TokenKind;

// Parse failures are accumulated on the parser, not thrown: callers
// inspect the list after parsing and treat a non-empty one as "do not
// evaluate this program".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),

    #[error("could not parse {0} as integer")]
    IntegerParse(String),

    #[error("call target must be an identifier or a function literal")]
    InvalidCallTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_token_message() {
        let error = ParserError::UnexpectedToken {
            expected: TokenKind::RightParen,
            found: TokenKind::Eof,
        };

        assert_eq!(
            error.to_string(),
            "expected next token to be ), got eof instead"
        );
    }

    #[test]
    fn no_prefix_message() {
        assert_eq!(
            ParserError::NoPrefixParseFn(TokenKind::Illegal).to_string(),
            "no prefix parse function for illegal found"
        );
    }
}
