use async_trait::async_trait;

use crate::{
    applications::domain::model::{
        entities::application::Application,
        enums::application_domain_error::ApplicationDomainError,
        queries::{
            available_candidates_query::AvailableCandidatesQuery,
            get_application_query::GetApplicationQuery,
            list_applications_query::ListApplicationsQuery,
        },
    },
    shared::domain::model::value_objects::username::Username,
};

#[async_trait]
pub trait ApplicationQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListApplicationsQuery,
    ) -> Result<Vec<Application>, ApplicationDomainError>;

    async fn handle_available_candidates(
        &self,
        query: AvailableCandidatesQuery,
    ) -> Result<Vec<Username>, ApplicationDomainError>;

    async fn handle_get(
        &self,
        query: GetApplicationQuery,
    ) -> Result<Application, ApplicationDomainError>;
}
