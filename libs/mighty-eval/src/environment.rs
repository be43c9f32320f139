//! # Environment
//!
//! Variables, user functions and the pending wait counter of one run.
//!
//! Environments never nest. A user function call gets a brand new
//! environment holding only its parameters, and it is dropped when the call
//! returns. `true` and `false` are predefined in every environment.
//!
//! ## Example
//!
//! ```rust
//! use mighty_eval::environment::Environment;
//! use mighty_eval::value::Value;
//!
//! let mut env = Environment::new();
//! env.set("x", Value::Int(10));
//! assert_eq!(env.get("x").unwrap(), &Value::Int(10));
//! assert_eq!(env.get("true").unwrap(), &Value::Int(1));
//! ```

use crate::error::{EvalError, Result};
use crate::value::Value;
use mighty_parser::ast::FunctionDef;
use std::collections::HashMap;
use std::sync::Arc;

/// Variable and function bindings for one program or one call.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Variable bindings.
    variables: HashMap<String, Value>,
    /// User-defined functions.
    functions: HashMap<String, Arc<FunctionDef>>,
    /// Ticks the engine must idle before the next statement.
    pending_wait_ticks: u64,
}

impl Environment {
    /// Create an environment with only the predefined constants.
    pub fn new() -> Self {
        let mut env = Self {
            variables: HashMap::new(),
            functions: HashMap::new(),
            pending_wait_ticks: 0,
        };

        env.set("true", Value::Int(1));
        env.set("false", Value::Int(0));

        env
    }

    /// Get a variable value.
    ///
    /// ## Errors
    ///
    /// `EvalError::Name` if the variable is not defined.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.lookup(name)
            .ok_or_else(|| EvalError::Name(format!("name '{}' is not defined", name)))
    }

    /// Look up a variable without failing.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Bind or rebind a variable.
    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Register a user function, replacing any earlier one of the same name.
    pub fn define_function(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.clone(), Arc::new(def));
    }

    /// Look up a user function.
    pub fn function(&self, name: &str) -> Option<Arc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    /// Ticks still to be idled.
    pub fn pending_wait_ticks(&self) -> u64 {
        self.pending_wait_ticks
    }

    /// Whether a wait is in progress.
    pub fn is_waiting(&self) -> bool {
        self.pending_wait_ticks > 0
    }

    /// Start a wait unless one is already running.
    ///
    /// Waits do not stack: a second request while waiting is ignored.
    ///
    /// ## Returns
    ///
    /// true if the request took effect
    pub fn request_wait(&mut self, ticks: u64) -> bool {
        if self.is_waiting() {
            return false;
        }
        self.pending_wait_ticks = ticks;
        true
    }

    /// Spend one waiting tick, if any remain.
    ///
    /// ## Returns
    ///
    /// true if a tick was spent
    pub fn consume_wait_tick(&mut self) -> bool {
        if self.pending_wait_ticks == 0 {
            return false;
        }
        self.pending_wait_ticks -= 1;
        true
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_name() {
        let env = Environment::new();
        assert_eq!(
            env.get("missing"),
            Err(EvalError::Name("name 'missing' is not defined".to_string()))
        );
        assert!(env.lookup("missing").is_none());
    }

    #[test]
    fn test_rebinding_replaces_value() {
        let mut env = Environment::new();
        env.set("x", Value::Int(1));
        env.set("x", Value::from("one"));
        assert_eq!(env.get("x"), Ok(&Value::from("one")));
    }

    #[test]
    fn test_predefined_booleans_can_be_shadowed() {
        let mut env = Environment::new();
        assert_eq!(env.get("false"), Ok(&Value::Int(0)));
        env.set("true", Value::Int(7));
        assert_eq!(env.get("true"), Ok(&Value::Int(7)));
    }

    #[test]
    fn test_wait_does_not_stack() {
        let mut env = Environment::new();
        assert!(env.request_wait(3));
        assert!(!env.request_wait(10));
        assert_eq!(env.pending_wait_ticks(), 3);
    }

    #[test]
    fn test_wait_ticks_count_down() {
        let mut env = Environment::new();
        env.request_wait(2);
        assert!(env.consume_wait_tick());
        assert!(env.consume_wait_tick());
        assert!(!env.consume_wait_tick());
        assert!(!env.is_waiting());
        assert!(env.request_wait(1));
    }

    #[test]
    fn test_define_function() {
        let mut env = Environment::new();
        env.define_function(FunctionDef {
            name: "f".to_string(),
            params: Vec::new(),
            body: Vec::new(),
        });
        assert!(env.function("f").is_some());
        assert!(env.function("g").is_none());
    }
}
