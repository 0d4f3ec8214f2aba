//! Equality policy deciding whether a new target starts a transition.
//!
//! Equality is evaluated over `Option<T>`: presence must match exactly, and
//! two present values are compared either with `PartialEq` or with a
//! caller-supplied comparator.

use std::fmt;

/// Pure comparator over optional targets.
///
/// `None` equals `None`. `None` never equals `Some`, whatever the
/// comparator says. Two `Some` values are equal when the comparator
/// returns true.
///
/// # Example
///
/// ```rust
/// use transitioned::core::Equality;
///
/// // Compare only the second character, ignoring the rest.
/// let by_index = Equality::by(|a: &&str, b: &&str| a.as_bytes()[1] == b.as_bytes()[1]);
///
/// assert!(by_index.equal(&Some("A1"), &Some("B1")));
/// assert!(!by_index.equal(&Some("A1"), &Some("A2")));
/// assert!(!by_index.equal(&Some("A1"), &None));
/// assert!(by_index.equal(&None, &None));
///
/// let strict = Equality::strict();
/// assert!(strict.equal(&Some(3), &Some(3)));
/// assert!(!strict.equal(&Some(3), &Some(4)));
/// ```
pub struct Equality<T> {
    comparator: Box<dyn Fn(&T, &T) -> bool + Send + Sync>,
    custom: bool,
}

impl<T: PartialEq + 'static> Equality<T> {
    /// Plain `PartialEq` comparison, used when no comparator is supplied.
    pub fn strict() -> Self {
        Equality {
            comparator: Box::new(|a: &T, b: &T| a == b),
            custom: false,
        }
    }
}

impl<T> Equality<T> {
    /// Equality from a caller-supplied comparator.
    ///
    /// The comparator must be pure; it is consulted on every incoming
    /// target.
    pub fn by<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Equality {
            comparator: Box::new(comparator),
            custom: true,
        }
    }

    pub fn equal(&self, a: &Option<T>, b: &Option<T>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => (self.comparator)(a, b),
            _ => false,
        }
    }

    /// True when built from a caller-supplied comparator.
    pub fn is_custom(&self) -> bool {
        self.custom
    }
}

impl<T: PartialEq + 'static> Default for Equality<T> {
    fn default() -> Self {
        Self::strict()
    }
}

impl<T> fmt::Debug for Equality<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.custom {
            "Equality::Custom"
        } else {
            "Equality::Strict"
        })
    }
}
