use async_trait::async_trait;

use crate::applications::domain::model::{
    entities::application::Application,
    enums::{
        application_domain_error::ApplicationDomainError, application_status::ApplicationStatus,
    },
    value_objects::{application_id::ApplicationId, role_promotion::RolePromotion},
};

/// Read-modify-write step run against the locked record. Returning an error
/// aborts the update without persisting anything.
pub type ApplicationMutation = Box<
    dyn FnOnce(&mut Application) -> Result<Option<RolePromotion>, ApplicationDomainError> + Send,
>;

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn create(&self, application: Application)
    -> Result<Application, ApplicationDomainError>;

    async fn find_by_id(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Option<Application>, ApplicationDomainError>;

    /// Ordered by creation time, oldest first.
    async fn find_all_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<Application>, ApplicationDomainError>;

    /// Applies `mutation` while holding the record exclusively and commits
    /// the record together with the returned promotion, if any. Concurrent
    /// updates of the same id are serialized; other ids are unaffected.
    ///
    /// The store writes the promoted role itself, in the same transaction,
    /// rather than going through the users context. A promotion for a user
    /// that no longer exists fails with `UserNotFound` and nothing is kept.
    async fn update(
        &self,
        application_id: &ApplicationId,
        mutation: ApplicationMutation,
    ) -> Result<(Application, Option<RolePromotion>), ApplicationDomainError>;
}
