use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub i64);

impl From<i64> for AuthorId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
