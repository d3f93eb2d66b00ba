use std::collections::HashMap;

/// Stores the variables of one calculator session.
///
/// Names are case-sensitive and an entry exists only after the first
/// `name = expr` assignment to it. The same `Environment` is meant to be
/// reused across evaluations, so values assigned by one expression are
/// visible to the next.
///
/// # Example
/// ```
/// use priocalc::interpreter::environment::Environment;
///
/// let mut env = Environment::new();
/// assert_eq!(env.get("x"), None);
///
/// env.set("x", 2.5);
/// assert_eq!(env.get("x"), Some(2.5));
/// assert_eq!(env.get("X"), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last value assigned to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Assigns `value` to `name`, creating the entry on first use.
    pub fn set(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Forgets every variable.
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}
