use crate::context::{AssertionContext, Flags};
use crate::errors::AssertError;
use crate::outcome::AssertionOutcome;
use crate::registry::MethodRegistry;
use crate::value::Value;

/// An assertion chain over one subject.
///
/// Chain modifiers (`not`, `length`) consume and return the chain; terminal
/// methods evaluate against the registry and return `Err` on failure.
#[derive(Debug, Clone)]
pub struct Assertion<'r> {
    registry: &'r MethodRegistry,
    subject: Value,
    flags: Flags,
}

macro_rules! unary_methods {
    ($($fn_name:ident => $method:literal),* $(,)?) => {
        $(
            #[doc = concat!("Invokes `", $method, "` with one argument.")]
            pub fn $fn_name(&self, value: impl Into<Value>) -> Result<(), AssertError> {
                self.call($method, &[value.into()])
            }
        )*
    };
}

macro_rules! binary_methods {
    ($($fn_name:ident => $method:literal),* $(,)?) => {
        $(
            #[doc = concat!("Invokes `", $method, "` with two arguments.")]
            pub fn $fn_name(
                &self,
                first: impl Into<Value>,
                second: impl Into<Value>,
            ) -> Result<(), AssertError> {
                self.call($method, &[first.into(), second.into()])
            }
        )*
    };
}

impl<'r> Assertion<'r> {
    /// Starts a chain on `subject`.
    pub fn new(registry: &'r MethodRegistry, subject: impl Into<Value>) -> Self {
        Self {
            registry,
            subject: subject.into(),
            flags: Flags::default(),
        }
    }

    /// Inverts the chain.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.flags.negate = !self.flags.negate;
        self
    }

    /// Compares the subject's length instead of the subject.
    pub fn length(mut self) -> Self {
        self.flags.length = true;
        self
    }

    /// The value under test.
    pub fn subject(&self) -> &Value {
        &self.subject
    }

    /// Active flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Runs `method` and returns its verdict without applying negation.
    pub fn evaluate(&self, method: &str, args: &[Value]) -> Result<AssertionOutcome, AssertError> {
        let ctx = AssertionContext::new(method, &self.subject, args, self.flags);
        self.registry.invoke(&ctx)
    }

    /// Runs `method`, applying negation; a false verdict becomes [`AssertError::Failed`].
    pub fn call(&self, method: &str, args: &[Value]) -> Result<(), AssertError> {
        self.evaluate(method, args)?.into_result(self.flags.negate)?;
        Ok(())
    }

    unary_methods! {
        equal => "equal",
        equals => "equals",
        eq => "eq",
        above => "above",
        gt => "gt",
        greater_than => "greaterThan",
        below => "below",
        lt => "lt",
        less_than => "lessThan",
        least => "least",
        gte => "gte",
        greater_than_or_equal => "greaterThanOrEqual",
        most => "most",
        lte => "lte",
        less_than_or_equal => "lessThanOrEqual",
    }

    binary_methods! {
        within => "within",
        close_to => "closeTo",
        approximately => "approximately",
    }
}
