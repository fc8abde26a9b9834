use numassert_canonical::{CanonicalInt, Normalizer, UnsupportedTypeError};
use numassert_host::{AssertError, AssertionContext, AssertionOutcome, Method, Value};
use tracing::debug;

use crate::relation::Relation;

/// The comparison a wrapped method performs in big-integer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// `subject <relation> argument`, described with `readable` in messages.
    Relation {
        /// Relation to evaluate.
        relation: Relation,
        /// Relation name used in messages (`"greater than"`, `"at least"`, ...).
        readable: &'static str,
    },
    /// `start <= subject <= finish`.
    Within,
    /// `|subject - target| <= delta`.
    CloseTo,
}

/// One wrapped method: its registry name and the check it performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    /// Registry name.
    pub name: &'static str,
    /// Big-integer comparison.
    pub check: Check,
}

const fn relation_override(
    name: &'static str,
    relation: Relation,
    readable: &'static str,
) -> Override {
    Override {
        name,
        check: Check::Relation { relation, readable },
    }
}

/// Every method name the extension wraps.
pub const OVERRIDES: [Override; 18] = [
    relation_override("equals", Relation::Eq, "equal"),
    relation_override("equal", Relation::Eq, "equal"),
    relation_override("eq", Relation::Eq, "equal"),
    relation_override("above", Relation::Gt, "above"),
    relation_override("gt", Relation::Gt, "greater than"),
    relation_override("greaterThan", Relation::Gt, "greater than"),
    relation_override("below", Relation::Lt, "below"),
    relation_override("lt", Relation::Lt, "less than"),
    relation_override("lessThan", Relation::Lt, "less than"),
    relation_override("least", Relation::Gte, "at least"),
    relation_override("gte", Relation::Gte, "greater than or equal"),
    relation_override("greaterThanOrEqual", Relation::Gte, "greater than or equal"),
    relation_override("most", Relation::Lte, "at most"),
    relation_override("lte", Relation::Lte, "less than or equal"),
    relation_override("lessThanOrEqual", Relation::Lte, "less than or equal"),
    Override {
        name: "within",
        check: Check::Within,
    },
    Override {
        name: "closeTo",
        check: Check::CloseTo,
    },
    Override {
        name: "approximately",
        check: Check::CloseTo,
    },
];

fn is_big(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_big_integer_like)
}

fn canonical(normalizer: &Normalizer, value: &Value) -> Result<CanonicalInt, UnsupportedTypeError> {
    normalizer.normalize(&value.as_raw_numeric()?)
}

impl Check {
    /// True when any operand this check reads is big-integer-like.
    pub fn applies(&self, ctx: &AssertionContext<'_>) -> bool {
        let arity = match self {
            Check::Relation { .. } => 1,
            Check::Within | Check::CloseTo => 2,
        };
        ctx.subject().is_big_integer_like()
            || (0..arity).any(|index| is_big(ctx.args().get(index)))
    }

    /// Arguments to hand the wrapped method when a length check receives a
    /// big-integer bound; `None` when no coercion applies.
    pub fn length_coercion(
        &self,
        ctx: &AssertionContext<'_>,
        normalizer: &Normalizer,
    ) -> Result<Option<Vec<Value>>, AssertError> {
        if !matches!(self, Check::Relation { .. }) || !ctx.flags().length {
            return Ok(None);
        }
        let Some(bound) = ctx.args().first().filter(|value| value.is_big_integer_like()) else {
            return Ok(None);
        };
        let value = canonical(normalizer, bound)?;
        let native = value
            .to_safe_f64()
            .ok_or_else(|| UnsupportedTypeError::UnsafeInteger {
                value: value.to_string(),
            })?;
        let mut args = ctx.args().to_vec();
        args[0] = Value::Number(native);
        Ok(Some(args))
    }

    /// Evaluates the check on canonical values.
    pub fn evaluate(
        &self,
        ctx: &AssertionContext<'_>,
        normalizer: &Normalizer,
    ) -> Result<AssertionOutcome, AssertError> {
        let subject = canonical(normalizer, ctx.subject())?;
        match *self {
            Check::Relation { relation, readable } => {
                let actual = canonical(normalizer, ctx.arg(0)?)?;
                Ok(AssertionOutcome::new(
                    relation.holds(&subject, &actual),
                    format!("Expected \"{subject}\" to be {readable} {actual}"),
                    format!("Expected \"{subject}\" NOT to be {readable} {actual}"),
                    subject.into(),
                    actual.into(),
                ))
            }
            Check::Within => {
                let start = canonical(normalizer, ctx.arg(0)?)?;
                let finish = canonical(normalizer, ctx.arg(1)?)?;
                Ok(AssertionOutcome::new(
                    start <= subject && subject <= finish,
                    format!("Expected \"{subject}\" to be within [{start},{finish}]"),
                    format!("Expected \"{subject}\" NOT to be within [{start},{finish}]"),
                    Value::List(vec![start.into(), finish.into()]),
                    subject.into(),
                ))
            }
            Check::CloseTo => {
                let target = canonical(normalizer, ctx.arg(0)?)?;
                let delta = canonical(normalizer, ctx.arg(1)?)?;
                let low = &target - &delta;
                let high = &target + &delta;
                Ok(AssertionOutcome::new(
                    subject.abs_diff(&target) <= delta,
                    format!("Expected \"{subject}\" to be within {delta} of {target}"),
                    format!("Expected \"{subject}\" NOT to be within {delta} of {target}"),
                    Value::Str(format!("A number between {low} and {high}")),
                    subject.into(),
                ))
            }
        }
    }
}

/// Routes one invocation: length coercion, big-integer comparison, or the
/// wrapped `fallback` unchanged.
pub fn dispatch(
    check: Check,
    ctx: &AssertionContext<'_>,
    normalizer: &Normalizer,
    fallback: &Method,
) -> Result<AssertionOutcome, AssertError> {
    if let Some(args) = check.length_coercion(ctx, normalizer)? {
        debug!(method = ctx.method(), "coerced big-integer length bound");
        return fallback(&ctx.with_args(&args));
    }
    if check.applies(ctx) {
        debug!(method = ctx.method(), "big-integer comparison");
        return check.evaluate(ctx, normalizer);
    }
    fallback(ctx)
}
