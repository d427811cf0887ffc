use chrono::{DateTime, Utc};

use crate::{
    applications::domain::model::{
        enums::{
            application_domain_error::ApplicationDomainError,
            application_status::ApplicationStatus, application_type::ApplicationType,
        },
        value_objects::{application_id::ApplicationId, role_promotion::RolePromotion},
    },
    shared::domain::model::value_objects::username::Username,
};

/// Persisted state of an application, used to rebuild the aggregate.
#[derive(Clone, Debug)]
pub struct ApplicationSnapshot {
    pub id: ApplicationId,
    pub from_user: Username,
    pub for_user: Username,
    pub application_type: ApplicationType,
    pub status: ApplicationStatus,
    pub admin_votes: Vec<Username>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct Application {
    id: ApplicationId,
    from_user: Username,
    for_user: Username,
    application_type: ApplicationType,
    status: ApplicationStatus,
    admin_votes: Vec<Username>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Application {
    pub fn new_sent(
        from_user: Username,
        for_user: Username,
        application_type: ApplicationType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ApplicationId::new_random(),
            from_user,
            for_user,
            application_type,
            status: ApplicationStatus::Sent,
            admin_votes: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    pub fn restore(snapshot: ApplicationSnapshot) -> Self {
        let mut admin_votes: Vec<Username> = Vec::with_capacity(snapshot.admin_votes.len());
        for voter in snapshot.admin_votes {
            if !admin_votes.contains(&voter) {
                admin_votes.push(voter);
            }
        }

        Self {
            id: snapshot.id,
            from_user: snapshot.from_user,
            for_user: snapshot.for_user,
            application_type: snapshot.application_type,
            status: snapshot.status,
            admin_votes,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        }
    }

    pub fn add_vote(
        &mut self,
        voter: Username,
        now: DateTime<Utc>,
    ) -> Result<(), ApplicationDomainError> {
        self.ensure_open()?;
        if self.has_voted(&voter) {
            return Err(ApplicationDomainError::AlreadyVoted);
        }
        self.admin_votes.push(voter);
        self.updated_at = now;
        Ok(())
    }

    pub fn remove_vote(
        &mut self,
        voter: &Username,
        now: DateTime<Utc>,
    ) -> Result<(), ApplicationDomainError> {
        self.ensure_open()?;
        let position = self
            .admin_votes
            .iter()
            .position(|existing| existing == voter)
            .ok_or(ApplicationDomainError::VoteNotFound)?;
        self.admin_votes.remove(position);
        self.updated_at = now;
        Ok(())
    }

    /// Closes the application once `threshold` distinct admins have voted and
    /// returns the promotion that has to be committed with it.
    pub fn settle_quorum(
        &mut self,
        threshold: usize,
        now: DateTime<Utc>,
    ) -> Result<Option<RolePromotion>, ApplicationDomainError> {
        self.ensure_open()?;
        if self.admin_votes.len() < threshold {
            return Ok(None);
        }

        self.status = ApplicationStatus::Done;
        self.updated_at = now;
        Ok(Some(RolePromotion {
            username: self.for_user.clone(),
            role: self.application_type.promoted_role(),
        }))
    }

    pub fn mark_deleted(&mut self, now: DateTime<Utc>) -> Result<(), ApplicationDomainError> {
        self.ensure_open()?;
        self.status = ApplicationStatus::Deleted;
        self.updated_at = now;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), ApplicationDomainError> {
        if self.status != ApplicationStatus::Sent {
            return Err(ApplicationDomainError::InvalidStatusTransition);
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.status == ApplicationStatus::Sent
    }

    pub fn has_voted(&self, voter: &Username) -> bool {
        self.admin_votes.contains(voter)
    }

    pub fn id(&self) -> ApplicationId {
        self.id
    }

    pub fn from_user(&self) -> &Username {
        &self.from_user
    }

    pub fn for_user(&self) -> &Username {
        &self.for_user
    }

    pub fn application_type(&self) -> ApplicationType {
        self.application_type
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn admin_votes(&self) -> &[Username] {
        &self.admin_votes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
