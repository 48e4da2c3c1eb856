use std::fmt::{self, Display};

///
/// Strand of a BED6 region.
///
/// `.` is read as [Strand::Unknown]. Any character other than `+`, `-`
/// or `.` is kept as-is in [Strand::Other].
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    Forward,
    Reverse,
    #[default]
    Unknown,
    Other(char),
}

impl Strand {
    ///
    /// Interpret the strand column of a BED line. Only the first
    /// character of the field is looked at.
    ///
    pub fn from_field(field: &str) -> Self {
        match field.chars().next() {
            Some('+') => Strand::Forward,
            Some('-') => Strand::Reverse,
            Some('.') | None => Strand::Unknown,
            Some(c) => Strand::Other(c),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::Unknown => '.',
            Strand::Other(c) => *c,
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("+", Strand::Forward)]
    #[case("-", Strand::Reverse)]
    #[case(".", Strand::Unknown)]
    #[case("..", Strand::Unknown)]
    #[case("*", Strand::Other('*'))]
    #[case("+strand", Strand::Forward)]
    fn test_from_field(#[case] field: &str, #[case] expected: Strand) {
        assert_eq!(Strand::from_field(field), expected);
    }

    #[rstest]
    fn test_display_keeps_literal_char() {
        assert_eq!(Strand::Other('*').to_string(), "*");
        assert_eq!(Strand::Unknown.to_string(), ".");
    }
}
