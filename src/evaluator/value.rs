use std::{
    cell::RefCell,
    fmt::{self, Debug, Display},
    rc::Rc,
};

use crate::ast::{expressions::Identifier, statements::BlockStmt};

use super::environment::Environment;

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    /// Carries a `return`ed value up through enclosing blocks
    Return(Box<Value>),
    Function(FunctionValue),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN_VALUE",
            Value::Function(_) => "FUNCTION",
        }
    }

    /// `false` and `null` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{}", value),
            Value::Null => write!(f, "null"),
            Value::Return(value) => write!(f, "{}", value),
            Value::Function(function) => write!(f, "{}", function),
        }
    }
}

/// Function value
/// A function literal closed over the environment it was evaluated in.
#[derive(Clone)]
pub struct FunctionValue {
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
    pub env: Rc<RefCell<Environment>>,
}

impl Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.value.as_str())
            .collect::<Vec<&str>>();

        write!(f, "fn({}) {}", parameters.join(", "), self.body)
    }
}

// The environment can hold the function itself, so it is left out
impl Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.env, &other.env)
            && self.parameters == other.parameters
            && self.body == other.body
    }
}
