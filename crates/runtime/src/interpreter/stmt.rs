use super::{EvalError, Interpreter};
use crate::environment::{Environment, ScopeId};
use crate::values::RuntimeVal;
use frontend::ast::{BlockStatement, Statement};

impl Interpreter {
    pub(super) fn execute_statement(
        &self,
        statement: Statement,
        env: &mut Environment,
        scope: ScopeId,
    ) -> Result<RuntimeVal, EvalError> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.evaluate(value, env, scope)?;

                // The binding lands in the current scope and the bound
                // value is the statement's result
                env.set(scope, name, value.clone());

                Ok(value)
            }
            Statement::Return { value } => {
                let value = self.evaluate(value, env, scope)?;

                Ok(RuntimeVal::Return(Box::new(value)))
            }
            Statement::Expression { expression } => self.evaluate(expression, env, scope),
            Statement::Block(block) => self.execute_block(block, env, scope),
        }
    }

    // A block stops at the first return signal and forwards it still
    // wrapped, so nested blocks unwind up to the enclosing call boundary
    pub(super) fn execute_block(
        &self,
        block: BlockStatement,
        env: &mut Environment,
        scope: ScopeId,
    ) -> Result<RuntimeVal, EvalError> {
        let mut result = None;

        for statement in block.statements {
            let value = self.execute_statement(statement, env, scope)?;

            if let RuntimeVal::Return(_) = value {
                return Ok(value);
            }

            result = Some(value);
        }

        result.ok_or(EvalError::EmptyStatementSequence)
    }
}
