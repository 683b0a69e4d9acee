use super::{EvalError, Interpreter};
use crate::environment::{Environment, ScopeId};
use crate::values::{RuntimeVal, ValueKind};
use frontend::ast::Expression;

impl Interpreter {
    pub(super) fn evaluate(
        &self,
        expression: Expression,
        env: &mut Environment,
        scope: ScopeId,
    ) -> Result<RuntimeVal, EvalError> {
        match expression {
            Expression::IntegerLiteral { value } => Ok(RuntimeVal::Int(value)),
            Expression::BooleanLiteral { value } => Ok(RuntimeVal::bool(value)),
            Expression::Identifier { name } => env
                .get(scope, &name)
                .cloned()
                .ok_or(EvalError::IdentifierNotFound(name)),
            Expression::Unary { operator, right } => {
                let right = self.evaluate(*right, env, scope)?;

                self.evaluate_unary(&operator, right)
            }
            Expression::Binary {
                operator,
                left,
                right,
            } => {
                // Each operand short-circuits on its own error before the
                // operator is applied
                let left = self.evaluate(*left, env, scope)?;
                let right = self.evaluate(*right, env, scope)?;

                self.evaluate_binary(&operator, left, right)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.evaluate(*condition, env, scope)?;

                if condition.is_truthy() {
                    self.execute_block(consequence, env, scope)
                } else if let Some(alternative) = alternative {
                    self.execute_block(alternative, env, scope)
                } else {
                    Ok(RuntimeVal::Null)
                }
            }
            // The literal captures the current scope without evaluating
            // its body
            Expression::Function { parameters, body } => Ok(RuntimeVal::Function {
                parameters,
                body,
                scope,
            }),
            Expression::Call { callee, arguments } => {
                let callee = self.evaluate(*callee, env, scope)?;

                // Arguments evaluate left to right, stopping at the
                // first failing one
                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.evaluate(argument, env, scope)?);
                }

                self.evaluate_call(callee, args, env)
            }
        }
    }

    fn evaluate_unary(&self, operator: &str, right: RuntimeVal) -> Result<RuntimeVal, EvalError> {
        match operator {
            // Any operand kind is accepted, negation goes through
            // truthiness
            "!" => Ok(RuntimeVal::bool(!right.is_truthy())),
            "-" => match right {
                RuntimeVal::Int(value) => Ok(RuntimeVal::Int(value.wrapping_neg())),
                other => Err(EvalError::UnknownUnaryOperator {
                    operator: operator.into(),
                    right: other.kind(),
                }),
            },
            _ => Err(EvalError::UnknownUnaryOperator {
                operator: operator.into(),
                right: right.kind(),
            }),
        }
    }

    fn evaluate_binary(
        &self,
        operator: &str,
        left: RuntimeVal,
        right: RuntimeVal,
    ) -> Result<RuntimeVal, EvalError> {
        if left.kind() != right.kind() {
            return Err(EvalError::TypeMismatch {
                left: left.kind(),
                operator: operator.into(),
                right: right.kind(),
            });
        }

        // == and != go through generic equality before the integer table
        // is consulted, so booleans and null compare too
        match operator {
            "==" => return Ok(RuntimeVal::bool(left.equals(&right))),
            "!=" => return Ok(RuntimeVal::bool(!left.equals(&right))),
            _ => {}
        }

        match (left, right) {
            (RuntimeVal::Int(left), RuntimeVal::Int(right)) => {
                self.evaluate_integer_binary(operator, left, right)
            }
            (left, right) => Err(EvalError::UnknownBinaryOperator {
                left: left.kind(),
                operator: operator.into(),
                right: right.kind(),
            }),
        }
    }

    // 64-bit signed arithmetic: overflow wraps, division truncates
    // toward zero
    fn evaluate_integer_binary(
        &self,
        operator: &str,
        left: i64,
        right: i64,
    ) -> Result<RuntimeVal, EvalError> {
        match operator {
            "+" => Ok(RuntimeVal::Int(left.wrapping_add(right))),
            "-" => Ok(RuntimeVal::Int(left.wrapping_sub(right))),
            "*" => Ok(RuntimeVal::Int(left.wrapping_mul(right))),
            "/" => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }

                Ok(RuntimeVal::Int(left.wrapping_div(right)))
            }
            "<" => Ok(RuntimeVal::bool(left < right)),
            ">" => Ok(RuntimeVal::bool(left > right)),
            _ => Err(EvalError::UnknownBinaryOperator {
                left: ValueKind::Integer,
                operator: operator.into(),
                right: ValueKind::Integer,
            }),
        }
    }

    // Runs the body in a fresh call scope chained to the function's
    // captured scope, then unwraps the return signal: it never escapes
    // the call that produced it.
    fn evaluate_call(
        &self,
        callee: RuntimeVal,
        args: Vec<RuntimeVal>,
        env: &mut Environment,
    ) -> Result<RuntimeVal, EvalError> {
        match callee {
            RuntimeVal::Function {
                parameters,
                body,
                scope,
            } => {
                let call_scope = env.create_function_env(scope, &parameters, args);

                match self.execute_block(body, env, call_scope)? {
                    RuntimeVal::Return(value) => Ok(*value),
                    value => Ok(value),
                }
            }
            other => Err(EvalError::NotAFunction(other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontend::lexer::Lexer;
    use frontend::parser::Parser;

    fn run(input: &str) -> Result<RuntimeVal, EvalError> {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse();

        assert!(
            parser.errors.is_empty(),
            "parser produced errors for {input:?}: {:?}",
            parser.errors
        );

        let mut env = Environment::new();
        Interpreter {}.execute_program(program, &mut env)
    }

    #[test]
    fn evaluate_integer_expressions() {
        let tests = [
            ("5", 5),
            ("10", 10),
            ("-5", -5),
            ("-10", -10),
            ("5 + 5 + 5 + 5 - 10", 10),
            ("2 * 2 * 2 * 2 * 2", 32),
            ("-50 + 100 + -50", 0),
            ("5 * 2 + 10", 20),
            ("5 + 2 * 10", 25),
            ("20 + 2 * -10", 0),
            ("50 / 2 * 2 + 10", 60),
            ("2 * (5 + 10)", 30),
            ("3 * 3 * 3 + 10", 37),
            ("3 * (3 * 3) + 10", 37),
            ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ];

        for (input, expected) in tests {
            assert_eq!(run(input), Ok(RuntimeVal::Int(expected)), "input: {input}");
        }
    }

    #[test]
    fn evaluate_boolean_expressions() {
        let tests = [
            ("true", true),
            ("false", false),
            ("1 < 2", true),
            ("1 > 2", false),
            ("1 < 1", false),
            ("1 > 1", false),
            ("1 == 1", true),
            ("1 != 1", false),
            ("1 == 2", false),
            ("1 != 2", true),
            ("true == true", true),
            ("false == false", true),
            ("true == false", false),
            ("true != false", true),
            ("(1 < 2) == true", true),
            ("(1 < 2) == false", false),
            ("(1 > 2) == true", false),
            ("(1 > 2) == false", true),
        ];

        for (input, expected) in tests {
            assert_eq!(run(input), Ok(RuntimeVal::bool(expected)), "input: {input}");
        }
    }

    #[test]
    fn evaluate_bang_operator() {
        let tests = [
            ("!true", false),
            ("!false", true),
            ("!5", false),
            ("!!true", true),
            ("!!false", false),
            ("!!5", true),
        ];

        for (input, expected) in tests {
            assert_eq!(run(input), Ok(RuntimeVal::bool(expected)), "input: {input}");
        }
    }

    #[test]
    fn evaluate_if_else_expressions() {
        let tests = [
            ("if (true) { 10 }", RuntimeVal::Int(10)),
            ("if (false) { 10 }", RuntimeVal::Null),
            ("if (1) { 10 }", RuntimeVal::Int(10)),
            ("if (1 < 2) { 10 }", RuntimeVal::Int(10)),
            ("if (1 > 2) { 10 }", RuntimeVal::Null),
            ("if (1 > 2) { 10 } else { 20 }", RuntimeVal::Int(20)),
            ("if (1 < 2) { 10 } else { 20 }", RuntimeVal::Int(10)),
        ];

        for (input, expected) in tests {
            assert_eq!(run(input), Ok(expected.clone()), "input: {input}");
        }
    }

    #[test]
    fn evaluate_return_statements() {
        let nested = "
            if (10 > 1) {
                if (10 > 1) {
                    return 10;
                }
                return 1;
            }
        ";

        let tests = [
            ("return 10;", 10),
            ("return 10; 9;", 10),
            ("return 2 * 5; 9;", 10),
            ("9; return 2 * 5; 9;", 10),
            (nested, 10),
        ];

        for (input, expected) in tests {
            assert_eq!(run(input), Ok(RuntimeVal::Int(expected)), "input: {input}");
        }
    }

    #[test]
    fn evaluate_error_propagation() {
        let nested = "
            if (10 > 1) {
                if (10 > 1) {
                    return true + false;
                }
                return 1;
            }
        ";

        let tests = [
            ("foobar", "identifier not found: foobar"),
            ("5 + true;", "type mismatch: integer + boolean"),
            ("5 + true; 5;", "type mismatch: integer + boolean"),
            ("-true;", "unknown operator: -boolean"),
            ("true + false;", "unknown operator: boolean + boolean"),
            ("5; true + false; 5", "unknown operator: boolean + boolean"),
            (
                "if (10 > 1) { true + false; }",
                "unknown operator: boolean + boolean",
            ),
            (nested, "unknown operator: boolean + boolean"),
        ];

        for (input, expected) in tests {
            let error = run(input).expect_err(input);
            assert_eq!(error.to_string(), expected, "input: {input}");
        }
    }

    #[test]
    fn right_operand_error_wins_over_left_value() {
        // The right-hand result must be the one checked, not the left
        assert_eq!(
            run("5 + missing;"),
            Err(EvalError::IdentifierNotFound("missing".into()))
        );
    }

    #[test]
    fn evaluate_let_statements() {
        let tests = [
            ("let a = 5; a;", 5),
            ("let a = 5 * 5; a;", 25),
            ("let a = 5; let b = a; b;", 5),
            ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
        ];

        for (input, expected) in tests {
            assert_eq!(run(input), Ok(RuntimeVal::Int(expected)), "input: {input}");
        }
    }

    #[test]
    fn function_literal_captures_structure() {
        let result = run("fn(x) { x + 2 }").expect("should evaluate");

        match result {
            RuntimeVal::Function {
                parameters, body, ..
            } => {
                assert_eq!(parameters, vec!["x".to_string()]);
                assert_eq!(body.to_string(), "(x + 2)");
            }
            other => panic!("expected a function value, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_function_application() {
        let tests = [
            ("let identity = fn(x) { x; }; identity(5);", 5),
            ("let identity = fn(x) { return x; }; identity(5);", 5),
            ("let double = fn(x) { x * 2; }; double(5);", 10),
            ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
            ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
            ("fn(x) { x; }(5)", 5),
        ];

        for (input, expected) in tests {
            assert_eq!(run(input), Ok(RuntimeVal::Int(expected)), "input: {input}");
        }
    }

    #[test]
    fn closures_see_their_defining_scope() {
        let input = "
            let adder = fn(x) { fn(y) { x + y; } };
            let addTwo = adder(2);
            addTwo(2);
        ";

        assert_eq!(run(input), Ok(RuntimeVal::Int(4)));
    }

    #[test]
    fn call_parameters_shadow_outer_bindings() {
        let input = "
            let x = 5;
            let double = fn(x) { x * 2; };
            double(10) + x;
        ";

        assert_eq!(run(input), Ok(RuntimeVal::Int(25)));
    }

    #[test]
    fn calling_a_non_function_fails() {
        assert_eq!(
            run("let x = 5; x(1);"),
            Err(EvalError::NotAFunction(ValueKind::Integer))
        );
    }

    #[test]
    fn arity_mismatch_binds_positionally() {
        // Missing parameters stay unbound and surface at first use
        assert_eq!(
            run("let add = fn(x, y) { x + y; }; add(1);"),
            Err(EvalError::IdentifierNotFound("y".into()))
        );

        // Extra arguments are silently dropped
        assert_eq!(
            run("let identity = fn(x) { x; }; identity(1, 2, 3);"),
            Ok(RuntimeVal::Int(1))
        );
    }

    #[test]
    fn argument_errors_short_circuit_left_to_right() {
        assert_eq!(
            run("let add = fn(x, y) { x + y; }; add(missing, alsoMissing);"),
            Err(EvalError::IdentifierNotFound("missing".into()))
        );
    }

    #[test]
    fn functions_compare_unequal() {
        assert_eq!(
            run("fn(x) { x; } == fn(x) { x; }"),
            Ok(RuntimeVal::FALSE)
        );
        assert_eq!(run("fn(x) { x; } != fn(x) { x; }"), Ok(RuntimeVal::TRUE));
    }

    #[test]
    fn division_truncates_toward_zero() {
        let tests = [("7 / 2", 3), ("-7 / 2", -3), ("7 / -2", -3), ("-7 / -2", 3)];

        for (input, expected) in tests {
            assert_eq!(run(input), Ok(RuntimeVal::Int(expected)), "input: {input}");
        }
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(run("5 / 0;"), Err(EvalError::DivisionByZero));
        assert_eq!(run("5 / (3 - 3);"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn arithmetic_wraps_on_overflow() {
        assert_eq!(
            run("9223372036854775807 + 1"),
            Ok(RuntimeVal::Int(i64::MIN))
        );
        assert_eq!(
            run("0 - 9223372036854775807 - 2"),
            Ok(RuntimeVal::Int(i64::MAX))
        );
    }

    #[test]
    fn nested_return_stops_sibling_statements() {
        let input = "
            let probe = fn() {
                if (true) {
                    if (true) {
                        return 1;
                    }
                    return 2;
                }
                return 3;
            };
            probe();
        ";

        assert_eq!(run(input), Ok(RuntimeVal::Int(1)));
    }

    #[test]
    fn if_without_alternative_yields_null() {
        assert_eq!(run("if (false) { 10 }"), Ok(RuntimeVal::Null));
    }
}
