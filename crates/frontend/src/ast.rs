use std::fmt::Display;

// Root of every parse, an ordered statement sequence
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let {
        name: String,
        value: Expression,
    },
    Return {
        value: Expression,
    },
    // A bare expression used for its value
    Expression {
        expression: Expression,
    },
    Block(BlockStatement),
}

// Ordered statement sequence used as function and if bodies
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

// Box breaks the recursion: sub-expressions are built while parsing, so
// each node owns its children exclusively and the tree has no sharing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier {
        name: String,
    },
    IntegerLiteral {
        value: i64,
    },
    BooleanLiteral {
        value: bool,
    },
    Unary {
        operator: String,
        right: Box<Expression>,
    },
    Binary {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    Function {
        parameters: Vec<String>,
        body: BlockStatement,
    },
    // The callee is restricted to an identifier or an inline function
    // literal at parse time
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

// ---------------------
//  Canonical rendering
// ---------------------
// Fully parenthesized form used to test precedence, not end-user output.

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return { value } => write!(f, "return {value};"),
            Statement::Expression { expression } => write!(f, "{expression}"),
            Statement::Block(block) => write!(f, "{block}"),
        }
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier { name } => write!(f, "{name}"),
            Expression::IntegerLiteral { value } => write!(f, "{value}"),
            Expression::BooleanLiteral { value } => write!(f, "{value}"),
            Expression::Unary { operator, right } => write!(f, "({operator}{right})"),
            Expression::Binary {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => match alternative {
                Some(alternative) => {
                    write!(f, "if ({condition}) {{{consequence}}} else {{{alternative}}}")
                }
                None => write!(f, "if ({condition}) {{{consequence}}}"),
            },
            Expression::Function { parameters, body } => {
                write!(f, "fn({}) {{{body}}}", parameters.join(", "))
            }
            Expression::Call { callee, arguments } => {
                let arguments = arguments
                    .iter()
                    .map(|argument| argument.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");

                write!(f, "{callee}({arguments})")
            }
        }
    }
}
