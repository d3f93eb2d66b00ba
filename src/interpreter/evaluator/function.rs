use std::f64::consts::{E, PI};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Type alias for builtin function handlers.
///
/// Every builtin takes exactly one real argument. Arguments outside the
/// mathematical domain (`sqrt(-1)`, `ln(0)`) produce NaN or infinity, never
/// an error.
type BuiltinFn = fn(f64) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a lowercase name and a function pointer implementing
/// the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => f64::sin,
    "cos"   => f64::cos,
    "tan"   => f64::tan,
    "sqrt"  => f64::sqrt,
    "round" => round_half_up,
    "ln"    => f64::ln,
}

/// Builtin constants, by lowercase name.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("pi", PI), ("e", E)];

fn lookup_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|def| def.name.eq_ignore_ascii_case(name))
}

/// Returns `true` if `name` is a builtin function, ignoring case.
///
/// # Example
/// ```
/// use priocalc::interpreter::evaluator::function::is_builtin;
///
/// assert!(is_builtin("SQRT"));
/// assert!(!is_builtin("pi"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    lookup_builtin(name).is_some()
}

/// Returns the value of a builtin constant, ignoring case.
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    BUILTIN_CONSTANTS.iter()
                     .find(|(constant, _)| constant.eq_ignore_ascii_case(name))
                     .map(|(_, value)| *value)
}

/// Applies the builtin function `name` to `argument`.
///
/// # Errors
/// `UnknownFunction` if `name` is not in the builtin table. Callers check
/// [`is_builtin`] first, so this only guards the dispatch itself.
///
/// # Example
/// ```
/// use priocalc::interpreter::evaluator::function::call_builtin;
///
/// assert_eq!(call_builtin("sqrt", 16.0, 0).unwrap(), 4.0);
/// assert!(call_builtin("sqrt", -1.0, 0).unwrap().is_nan());
/// assert!(call_builtin("cbrt", 8.0, 0).is_err());
/// ```
pub fn call_builtin(name: &str, argument: f64, position: usize) -> EvalResult<f64> {
    let def = lookup_builtin(name).ok_or_else(|| {
                                      RuntimeError::UnknownFunction { name: name.to_string(),
                                                                      position }
                                  })?;
    Ok((def.func)(argument))
}

/// Rounds to the nearest integer, with half-way cases going toward positive
/// infinity (`2.5 -> 3`, `-2.5 -> -2`).
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_goes_up_on_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn names_match_any_case() {
        assert!(is_builtin("Sin"));
        assert_eq!(constant("PI"), Some(PI));
        assert_eq!(constant("E"), Some(E));
        assert_eq!(constant("tau"), None);
        assert_eq!(BUILTIN_FUNCTIONS.len(), 6);
    }
}
