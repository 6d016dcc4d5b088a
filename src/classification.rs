use std::{borrow::Cow, fmt};

/// What gets printed for a given counter value
///
/// Labels are borrowed from the rules that produced them whenever possible,
/// only concatenations of several labels need an owned string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification<'a, N = u64> {
    /// No divisor matched, the counter value itself is printed
    Number(N),

    /// At least one divisor matched
    Label(Cow<'a, str>),
}
//
impl<N> Classification<'_, N> {
    /// Truth that no label applies to this value
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Label text, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Label(label) => Some(&**label),
        }
    }
}
//
impl<N: fmt::Display> fmt::Display for Classification<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::Label(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Classification;
    use std::borrow::Cow;

    #[test]
    fn display() {
        assert_eq!(Classification::<u64>::Number(42).to_string(), "42");
        assert_eq!(
            Classification::<u64>::Label(Cow::Borrowed("Foo")).to_string(),
            "Foo"
        );
        assert_eq!(Classification::<i32>::Number(-7).to_string(), "-7");
    }

    #[test]
    fn accessors() {
        let number = Classification::<u64>::Number(1);
        assert!(number.is_number());
        assert_eq!(number.label(), None);

        let label = Classification::<u64>::Label(Cow::Owned("FooBar".to_owned()));
        assert!(!label.is_number());
        assert_eq!(label.label(), Some("FooBar"));
    }
}
