use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::value::Value;

/// Environment for variable storage
///
/// Lookups fall back to the enclosing scope. Bindings always go into the
/// innermost one.
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// A fresh scope whose lookups fall back to `outer`.
    pub fn enclosed(outer: &Rc<RefCell<Environment>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
