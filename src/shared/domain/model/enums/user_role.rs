use std::str::FromStr;

/// Organization role. An approved application sets the role named by its
/// type, whatever the user held before, so a Member-type application for an
/// admin moves them down to `Member`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum UserRole {
    #[default]
    Bro,
    Member,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bro => "bro",
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "bro" => Ok(Self::Bro),
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            _ => Err(()),
        }
    }
}
