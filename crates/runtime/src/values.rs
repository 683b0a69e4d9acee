use std::fmt::Display;

use frontend::ast::BlockStatement;

use crate::environment::ScopeId;

// Runtime values are cheap to clone: a function clones its parameter
// list and body, everything else is a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeVal {
    Null,
    Int(i64),
    Bool(bool),
    // Control-flow signal produced by 'return'. It is unwrapped at the
    // call boundary and never surfaces as a result.
    Return(Box<RuntimeVal>),
    // A function carries the handle of its defining scope, the closure
    Function {
        parameters: Vec<String>,
        body: BlockStatement,
        scope: ScopeId,
    },
}

// Kind names as they appear in evaluation error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Integer,
    Boolean,
    Return,
    Function,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Return => write!(f, "returnValue"),
            ValueKind::Function => write!(f, "fn"),
        }
    }
}

impl RuntimeVal {
    pub const NULL: RuntimeVal = RuntimeVal::Null;
    pub const TRUE: RuntimeVal = RuntimeVal::Bool(true);
    pub const FALSE: RuntimeVal = RuntimeVal::Bool(false);

    pub fn bool(value: bool) -> RuntimeVal {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            RuntimeVal::Null => ValueKind::Null,
            RuntimeVal::Int(_) => ValueKind::Integer,
            RuntimeVal::Bool(_) => ValueKind::Boolean,
            RuntimeVal::Return(_) => ValueKind::Return,
            RuntimeVal::Function { .. } => ValueKind::Function,
        }
    }

    // null is falsy, booleans follow their value, every other kind is
    // truthy, zero included
    pub fn is_truthy(&self) -> bool {
        match self {
            RuntimeVal::Null => false,
            RuntimeVal::Bool(value) => *value,
            _ => true,
        }
    }

    // Language-level equality backing == and !=. Only like-kind scalar
    // values can compare equal, two functions never do, even when they
    // are structurally identical.
    pub fn equals(&self, other: &RuntimeVal) -> bool {
        match (self, other) {
            (RuntimeVal::Null, RuntimeVal::Null) => true,
            (RuntimeVal::Int(a), RuntimeVal::Int(b)) => a == b,
            (RuntimeVal::Bool(a), RuntimeVal::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for RuntimeVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeVal::Null => write!(f, "null"),
            RuntimeVal::Int(value) => write!(f, "{value}"),
            RuntimeVal::Bool(value) => write!(f, "{value}"),
            RuntimeVal::Return(value) => write!(f, "{value}"),
            RuntimeVal::Function {
                parameters, body, ..
            } => write!(f, "fn({}) {{{body}}}", parameters.join(", ")),
        }
    }
}
