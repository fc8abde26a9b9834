use numassert_canonical::CanonicalInt;

/// Relation checked by the equality and ordering methods, read as `expected <op> actual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `expected == actual`
    Eq,
    /// `expected > actual`
    Gt,
    /// `expected < actual`
    Lt,
    /// `expected >= actual`
    Gte,
    /// `expected <= actual`
    Lte,
}

impl Relation {
    /// Evaluates the relation on canonical values.
    pub fn holds(self, expected: &CanonicalInt, actual: &CanonicalInt) -> bool {
        match self {
            Relation::Eq => expected == actual,
            Relation::Gt => expected > actual,
            Relation::Lt => expected < actual,
            Relation::Gte => expected >= actual,
            Relation::Lte => expected <= actual,
        }
    }
}
