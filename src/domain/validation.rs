use super::error::ValidationErrors;

/// A single client-side check. Rules are evaluated in declaration order, so
/// new rules go at the end of a rule set to keep earlier messages stable.
pub struct Rule<T> {
    check: fn(&T) -> bool,
    message: &'static str,
}

impl<T> Rule<T> {
    pub const fn new(check: fn(&T) -> bool, message: &'static str) -> Self {
        Self { check, message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn passes(&self, target: &T) -> bool {
        (self.check)(target)
    }
}

/// Messages of every failing rule, in rule order.
pub fn evaluate<T>(rules: &[Rule<T>], target: &T) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| !rule.passes(target))
        .map(|rule| rule.message().to_string())
        .collect()
}

pub fn check<T>(rules: &[Rule<T>], target: &T) -> Result<(), ValidationErrors> {
    let errors = evaluate(rules, target);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}
