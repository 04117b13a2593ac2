//! Prefix operators.

use lox_ir::{Token, TokenKind};

use crate::errors::{self, EvalResult};
use crate::Value;

/// Apply `-` or `!` to an evaluated operand.
pub(crate) fn evaluate_unary(operator: &Token, operand: Value) -> EvalResult {
    match operator.kind {
        TokenKind::Minus => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(errors::number_operand(operator)),
        },
        TokenKind::Bang => Ok(Value::Bool(!operand.is_truthy())),
        // The parser only produces the two operators above.
        _ => Err(errors::number_operand(operator)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_ir::Literal;

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, Literal::Nil, 1)
    }

    #[test]
    fn negate() {
        let minus = op(TokenKind::Minus, "-");
        assert_eq!(evaluate_unary(&minus, Value::Number(2.0)), Ok(Value::Number(-2.0)));
        let err = evaluate_unary(&minus, Value::string("2"));
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("Operand must be a number.".to_owned())
        );
    }

    #[test]
    fn not_uses_truthiness() {
        let bang = op(TokenKind::Bang, "!");
        assert_eq!(evaluate_unary(&bang, Value::Nil), Ok(Value::Bool(true)));
        assert_eq!(evaluate_unary(&bang, Value::Number(0.0)), Ok(Value::Bool(false)));
        assert_eq!(evaluate_unary(&bang, Value::string("")), Ok(Value::Bool(false)));
        assert_eq!(evaluate_unary(&bang, Value::Bool(false)), Ok(Value::Bool(true)));
    }
}
