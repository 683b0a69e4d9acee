use std::collections::HashMap;

use crate::values::RuntimeVal;

// Handle into the scope arena. Functions capture their defining scope by
// storing its handle, so several closures can share an outer scope
// without owning back-references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScopeId(usize);

#[derive(Debug, Default)]
struct Scope {
    store: HashMap<String, RuntimeVal>,
    outer: Option<ScopeId>,
}

// Arena of chained mutable scopes. Lookups walk the outer chain, writes
// always land in the local store, so inner scopes shadow outer bindings
// instead of mutating them. Scope records live as long as the arena.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }

    // The top-level scope created with the arena
    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn create_scope(&mut self, outer: ScopeId) -> ScopeId {
        self.scopes.push(Scope {
            store: HashMap::new(),
            outer: Some(outer),
        });

        ScopeId(self.scopes.len() - 1)
    }

    // Absence is a signal, not an error: the evaluator turns it into an
    // "identifier not found" result
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<&RuntimeVal> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let scope = &self.scopes[id.0];

            if let Some(value) = scope.store.get(name) {
                return Some(value);
            }

            current = scope.outer;
        }

        None
    }

    // Insert or overwrite in the local store only, outer scopes are
    // never written through
    pub fn set(&mut self, scope: ScopeId, name: String, value: RuntimeVal) {
        self.scopes[scope.0].store.insert(name, value);
    }

    // Fresh call scope chained to the function's captured scope, with
    // parameters bound to arguments positionally. Arity mismatches are
    // not validated: extra arguments are dropped and missing parameters
    // stay unbound until a lookup reports them as not found.
    pub fn create_function_env(
        &mut self,
        captured: ScopeId,
        parameters: &[String],
        arguments: Vec<RuntimeVal>,
    ) -> ScopeId {
        let scope = self.create_scope(captured);

        for (parameter, argument) in parameters.iter().zip(arguments) {
            self.set(scope, parameter.clone(), argument);
        }

        scope
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
