use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref USERNAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9_.\-]{1,64}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        let trimmed = value.trim();
        if !USERNAME_REGEX.is_match(trimmed) {
            return Err("username must match [A-Za-z0-9_.-]{1,64}".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
