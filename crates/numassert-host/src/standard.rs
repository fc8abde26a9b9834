//! Default implementations: strict equality, numeric ordering with a
//! length mode, inclusive ranges, and absolute tolerance on native numbers.

use crate::context::AssertionContext;
use crate::errors::AssertError;
use crate::outcome::AssertionOutcome;
use crate::registry::MethodRegistry;
use crate::value::Value;

/// Names of the strict equality method and its aliases.
pub const EQUALITY_METHODS: [&str; 3] = ["equal", "equals", "eq"];
/// Names of the tolerance method and its alias.
pub const TOLERANCE_METHODS: [&str; 2] = ["closeTo", "approximately"];

#[derive(Debug, Clone, Copy)]
enum Bound {
    Above,
    Below,
    Least,
    Most,
}

impl Bound {
    fn holds(self, value: f64, bound: f64) -> bool {
        match self {
            Bound::Above => value > bound,
            Bound::Below => value < bound,
            Bound::Least => value >= bound,
            Bound::Most => value <= bound,
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Bound::Above => "above",
            Bound::Below => "below",
            Bound::Least => "at least",
            Bound::Most => "at most",
        }
    }

    fn complement(self) -> Bound {
        match self {
            Bound::Above => Bound::Most,
            Bound::Below => Bound::Least,
            Bound::Least => Bound::Below,
            Bound::Most => Bound::Above,
        }
    }
}

const ORDERING_METHODS: [(&str, Bound); 12] = [
    ("above", Bound::Above),
    ("gt", Bound::Above),
    ("greaterThan", Bound::Above),
    ("below", Bound::Below),
    ("lt", Bound::Below),
    ("lessThan", Bound::Below),
    ("least", Bound::Least),
    ("gte", Bound::Least),
    ("greaterThanOrEqual", Bound::Least),
    ("most", Bound::Most),
    ("lte", Bound::Most),
    ("lessThanOrEqual", Bound::Most),
];

pub(crate) fn register(registry: &mut MethodRegistry) {
    for name in EQUALITY_METHODS {
        registry.add_method(name, equal);
    }
    for (name, bound) in ORDERING_METHODS {
        registry.add_method(name, move |ctx| compare(ctx, bound));
    }
    registry.add_method("within", within);
    for name in TOLERANCE_METHODS {
        registry.add_method(name, close_to);
    }
}

fn invalid(ctx: &AssertionContext<'_>, reason: String) -> AssertError {
    AssertError::InvalidOperand {
        method: ctx.method().to_string(),
        reason,
    }
}

fn number_arg(ctx: &AssertionContext<'_>, index: usize) -> Result<f64, AssertError> {
    match ctx.arg(index)? {
        Value::Number(n) => Ok(*n),
        _ => Err(invalid(
            ctx,
            format!("the arguments to {} must be numbers", ctx.method()),
        )),
    }
}

fn number_subject(ctx: &AssertionContext<'_>) -> Result<f64, AssertError> {
    match ctx.subject() {
        Value::Number(n) => Ok(*n),
        other => Err(invalid(ctx, format!("expected {other} to be a number"))),
    }
}

fn length_of(ctx: &AssertionContext<'_>) -> Result<f64, AssertError> {
    let subject = ctx.subject();
    subject
        .length()
        .map(|count| count as f64)
        .ok_or_else(|| invalid(ctx, format!("expected {subject} to have a length")))
}

fn strict_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        _ => left == right,
    }
}

fn equal(ctx: &AssertionContext<'_>) -> Result<AssertionOutcome, AssertError> {
    let subject = ctx.subject();
    let expected = ctx.arg(0)?;
    Ok(AssertionOutcome::new(
        strict_equal(subject, expected),
        format!("expected {subject} to equal {expected}"),
        format!("expected {subject} to not equal {expected}"),
        expected.clone(),
        subject.clone(),
    ))
}

fn compare(ctx: &AssertionContext<'_>, bound: Bound) -> Result<AssertionOutcome, AssertError> {
    let subject = ctx.subject();
    let limit = number_arg(ctx, 0)?;
    let limit_value = Value::Number(limit);
    if ctx.flags().length {
        let count = length_of(ctx)?;
        let count_value = Value::Number(count);
        return Ok(AssertionOutcome::new(
            bound.holds(count, limit),
            format!(
                "expected {subject} to have a length {} {limit_value} but got {count_value}",
                bound.phrase()
            ),
            format!(
                "expected {subject} to not have a length {} {limit_value}",
                bound.phrase()
            ),
            limit_value,
            count_value,
        ));
    }
    let value = number_subject(ctx)?;
    Ok(AssertionOutcome::new(
        bound.holds(value, limit),
        format!("expected {subject} to be {} {limit_value}", bound.phrase()),
        format!(
            "expected {subject} to be {} {limit_value}",
            bound.complement().phrase()
        ),
        limit_value,
        subject.clone(),
    ))
}

fn within(ctx: &AssertionContext<'_>) -> Result<AssertionOutcome, AssertError> {
    let subject = ctx.subject();
    let start = number_arg(ctx, 0)?;
    let finish = number_arg(ctx, 1)?;
    let range = format!("{}..{}", Value::Number(start), Value::Number(finish));
    let expected = Value::List(vec![Value::Number(start), Value::Number(finish)]);
    if ctx.flags().length {
        let count = length_of(ctx)?;
        return Ok(AssertionOutcome::new(
            start <= count && count <= finish,
            format!("expected {subject} to have a length within {range}"),
            format!("expected {subject} to not have a length within {range}"),
            expected,
            Value::Number(count),
        ));
    }
    let value = number_subject(ctx)?;
    Ok(AssertionOutcome::new(
        start <= value && value <= finish,
        format!("expected {subject} to be within {range}"),
        format!("expected {subject} to not be within {range}"),
        expected,
        subject.clone(),
    ))
}

fn close_to(ctx: &AssertionContext<'_>) -> Result<AssertionOutcome, AssertError> {
    let subject = ctx.subject();
    let target = number_arg(ctx, 0)?;
    let delta = number_arg(ctx, 1)?;
    let value = number_subject(ctx)?;
    let target_value = Value::Number(target);
    let delta_value = Value::Number(delta);
    Ok(AssertionOutcome::new(
        (value - target).abs() <= delta,
        format!("expected {subject} to be close to {target_value} +/- {delta_value}"),
        format!("expected {subject} not to be close to {target_value} +/- {delta_value}"),
        target_value,
        subject.clone(),
    ))
}
