use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ApplicationStatus {
    Sent,
    Done,
    Deleted,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Done => "done",
            Self::Deleted => "deleted",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sent" => Ok(Self::Sent),
            "done" => Ok(Self::Done),
            "deleted" => Ok(Self::Deleted),
            _ => Err(()),
        }
    }
}
