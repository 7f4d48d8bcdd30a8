//! Name → compute-function table used when lowering `compute` steps.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rowchain_core::error::Result as CoreResult;
use rowchain_core::row::Row;
use rowchain_core::types::Cell;
use rowchain_operators::ComputeFn;

#[derive(Clone, Default)]
pub struct FunctionRegistry {
    funcs: HashMap<String, ComputeFn>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `func` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, func: F) -> &mut Self
    where
        F: Fn(&Row) -> CoreResult<Cell> + Send + Sync + 'static,
    {
        self.funcs.insert(name.into(), Arc::new(func));
        self
    }

    pub fn get(&self, name: &str) -> Option<ComputeFn> {
        self.funcs.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.funcs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
