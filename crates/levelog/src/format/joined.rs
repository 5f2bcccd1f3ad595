//! Space-separated rendering of argument lists

use std::fmt;

/// Renders an ordered list of values separated by single spaces
///
/// Stands in for variadic call sites: `logger.info(Joined(&[&"user", &id, &"logged in"]))`.
///
/// # Example
///
/// ```
/// use levelog::format::Joined;
///
/// let attempts = 3;
/// assert_eq!(Joined(&[&"retry", &attempts]).to_string(), "retry 3");
/// ```
#[derive(Clone, Copy)]
pub struct Joined<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Joined({:?})", self.to_string())
    }
}
