use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// A challenge is addressed either by its numeric id or by its slug.
///
/// All-digit identifiers are ids, anything else is a slug. Identifiers that
/// cannot be embedded as a single URL path segment are rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChallengeId {
    Id(u64),
    Slug(String),
}

impl FromStr for ChallengeId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidChallengeId(s.to_string());

        if s.is_empty()
            || s.chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%'))
        {
            return Err(invalid());
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse().map(Self::Id).map_err(|_| invalid());
        }

        Ok(Self::Slug(s.to_string()))
    }
}

impl TryFrom<&str> for ChallengeId {
    type Error = BoardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_id_parsing() {
        assert_eq!("12".parse::<ChallengeId>().unwrap(), ChallengeId::Id(12));
        assert_eq!(
            ChallengeId::try_from("sql-injection-101").unwrap(),
            ChallengeId::Slug("sql-injection-101".to_string())
        );
        assert_eq!(
            "12a".parse::<ChallengeId>().unwrap(),
            ChallengeId::Slug("12a".to_string())
        );

        assert!("".parse::<ChallengeId>().is_err());
        assert!("web 101".parse::<ChallengeId>().is_err());
        assert!("../admin".parse::<ChallengeId>().is_err());
        assert!("a?b=1".parse::<ChallengeId>().is_err());
        assert!("web#1".parse::<ChallengeId>().is_err());
        assert!("web%2F101".parse::<ChallengeId>().is_err());
        assert!("99999999999999999999999".parse::<ChallengeId>().is_err());
    }

    #[test]
    fn test_display_round_trips_path_segment() {
        assert_eq!(ChallengeId::Id(7).to_string(), "7");
        assert_eq!(
            ChallengeId::Slug("crypto-basics".to_string()).to_string(),
            "crypto-basics"
        );
    }
}
