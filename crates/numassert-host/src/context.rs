use crate::errors::AssertError;
use crate::value::Value;

/// Mode switches accumulated along an assertion chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// The chain was inverted with `.not()`.
    pub negate: bool,
    /// The chain compares the subject's length rather than the subject itself.
    pub length: bool,
}

/// Everything a method implementation may inspect for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct AssertionContext<'a> {
    method: &'a str,
    subject: &'a Value,
    args: &'a [Value],
    flags: Flags,
}

impl<'a> AssertionContext<'a> {
    /// Creates a context for invoking `method` on `subject`.
    pub fn new(method: &'a str, subject: &'a Value, args: &'a [Value], flags: Flags) -> Self {
        Self {
            method,
            subject,
            args,
            flags,
        }
    }

    /// Name the method was invoked under.
    pub fn method(&self) -> &'a str {
        self.method
    }

    /// The value under test.
    pub fn subject(&self) -> &'a Value {
        self.subject
    }

    /// All invocation arguments.
    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// Argument at `index`, or [`AssertError::MissingArgument`].
    pub fn arg(&self, index: usize) -> Result<&'a Value, AssertError> {
        self.args
            .get(index)
            .ok_or_else(|| AssertError::MissingArgument {
                method: self.method.to_string(),
                index,
            })
    }

    /// Active flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Same invocation with substituted arguments.
    pub fn with_args<'b>(&self, args: &'b [Value]) -> AssertionContext<'b>
    where
        'a: 'b,
    {
        AssertionContext {
            method: self.method,
            subject: self.subject,
            args,
            flags: self.flags,
        }
    }
}
