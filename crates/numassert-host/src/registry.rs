use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use crate::context::AssertionContext;
use crate::errors::AssertError;
use crate::outcome::AssertionOutcome;
use crate::standard;

/// A method implementation.
pub type Method =
    Arc<dyn Fn(&AssertionContext<'_>) -> Result<AssertionOutcome, AssertError> + Send + Sync>;

/// Name-to-implementation table consulted by every assertion chain.
#[derive(Clone, Default)]
pub struct MethodRegistry {
    methods: BTreeMap<String, Method>,
    extensions: BTreeSet<String>,
}

impl MethodRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the default comparison methods.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        standard::register(&mut registry);
        registry
    }

    /// Registers `method` under `name`, replacing any previous entry.
    pub fn add_method<F>(&mut self, name: impl Into<String>, method: F)
    where
        F: Fn(&AssertionContext<'_>) -> Result<AssertionOutcome, AssertError>
            + Send
            + Sync
            + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
    }

    /// Replaces `name` with the method built by `wrap`, which receives the
    /// previous implementation so it can call through to it.
    pub fn overwrite_method<W, F>(&mut self, name: &str, wrap: W) -> Result<(), AssertError>
    where
        W: FnOnce(Method) -> F,
        F: Fn(&AssertionContext<'_>) -> Result<AssertionOutcome, AssertError>
            + Send
            + Sync
            + 'static,
    {
        let previous = self
            .methods
            .get(name)
            .cloned()
            .ok_or_else(|| AssertError::UnknownMethod(name.to_string()))?;
        self.methods.insert(name.to_string(), Arc::new(wrap(previous)));
        Ok(())
    }

    /// Looks up a method.
    pub fn get(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    /// Returns true if `name` is registered.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Registered method names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Runs the method named by the context.
    pub fn invoke(&self, ctx: &AssertionContext<'_>) -> Result<AssertionOutcome, AssertError> {
        let method = self
            .get(ctx.method())
            .ok_or_else(|| AssertError::UnknownMethod(ctx.method().to_string()))?;
        method(ctx)
    }

    /// Records that the extension `tag` is installed. Returns false if it already was.
    pub fn claim_extension(&mut self, tag: &str) -> bool {
        self.extensions.insert(tag.to_string())
    }

    /// Returns true if the extension `tag` has been installed.
    pub fn has_extension(&self, tag: &str) -> bool {
        self.extensions.contains(tag)
    }
}

impl fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .field("extensions", &self.extensions)
            .finish()
    }
}
