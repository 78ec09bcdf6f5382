//! Representation kinds of the numeric tower.

use std::fmt::{self, Display, Formatter};

/// Represents the kind of a [`Number`](super::Number)
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberKind {
    Fixnum,
    Bignum,
    Flonum,
}

impl NumberKind {
    /// All kinds, in tower order
    pub const ALL: [Self; 3] = [Self::Fixnum, Self::Bignum, Self::Flonum];

    /// Check if values of this kind are exact
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Fixnum | Self::Bignum)
    }

    /// Get the name of this kind
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fixnum => "fixnum",
            Self::Bignum => "bignum",
            Self::Flonum => "flonum",
        }
    }
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactness() {
        assert!(NumberKind::Fixnum.is_exact());
        assert!(NumberKind::Bignum.is_exact());
        assert!(!NumberKind::Flonum.is_exact());
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = NumberKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["fixnum", "bignum", "flonum"]);
    }
}
