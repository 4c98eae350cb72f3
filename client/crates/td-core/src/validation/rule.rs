use crate::ValidationFailure;

/// A named predicate over a form, with the message shown when it fails.
pub struct Rule<F> {
    pub name: &'static str,
    pub message: &'static str,
    pub check: fn(&F) -> bool,
}

impl<F> Rule<F> {
    pub const fn new(name: &'static str, message: &'static str, check: fn(&F) -> bool) -> Self {
        Self {
            name,
            message,
            check,
        }
    }

    fn failure(&self) -> ValidationFailure {
        ValidationFailure {
            rule: self.name,
            message: self.message,
        }
    }
}

/// Evaluate `rules` in order and return the first one `form` violates.
pub fn first_violation<F>(rules: &[Rule<F>], form: &F) -> Option<ValidationFailure> {
    rules
        .iter()
        .find(|rule| !(rule.check)(form))
        .map(Rule::failure)
}
