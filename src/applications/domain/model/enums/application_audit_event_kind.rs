/// What happened to an application, as written to the audit trail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApplicationAuditEventKind {
    Created,
    VoteCast,
    VoteWithdrawn,
    Approved,
    Deleted,
}

impl ApplicationAuditEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::VoteCast => "vote_cast",
            Self::VoteWithdrawn => "vote_withdrawn",
            Self::Approved => "approved",
            Self::Deleted => "deleted",
        }
    }
}
