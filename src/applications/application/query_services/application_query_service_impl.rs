use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;

use crate::{
    applications::{
        domain::{
            model::{
                entities::application::Application,
                enums::{
                    application_domain_error::ApplicationDomainError,
                    application_status::ApplicationStatus,
                },
                queries::{
                    available_candidates_query::AvailableCandidatesQuery,
                    get_application_query::GetApplicationQuery,
                    list_applications_query::ListApplicationsQuery,
                },
            },
            services::{
                access_policy::AccessPolicy, application_query_service::ApplicationQueryService,
            },
        },
        infrastructure::persistence::repositories::application_repository::ApplicationRepository,
        interfaces::acl::user_directory_facade::UserDirectoryFacade,
    },
    shared::domain::model::value_objects::username::Username,
};

pub struct ApplicationQueryServiceImpl {
    application_repository: Arc<dyn ApplicationRepository>,
    user_directory: Arc<dyn UserDirectoryFacade>,
}

impl ApplicationQueryServiceImpl {
    pub fn new(
        application_repository: Arc<dyn ApplicationRepository>,
        user_directory: Arc<dyn UserDirectoryFacade>,
    ) -> Self {
        Self {
            application_repository,
            user_directory,
        }
    }
}

#[async_trait]
impl ApplicationQueryService for ApplicationQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListApplicationsQuery,
    ) -> Result<Vec<Application>, ApplicationDomainError> {
        let viewer = self
            .user_directory
            .find_by_username(query.viewer())
            .await?
            .ok_or(ApplicationDomainError::UserNotFound)?;

        let sent = self
            .application_repository
            .find_all_by_status(ApplicationStatus::Sent)
            .await?;

        AccessPolicy::visible_applications(
            &viewer.username,
            viewer.role,
            query.page_context(),
            sent,
        )
    }

    async fn handle_available_candidates(
        &self,
        query: AvailableCandidatesQuery,
    ) -> Result<Vec<Username>, ApplicationDomainError> {
        let application_type = query.application_type();

        let eligible = self
            .user_directory
            .list_usernames_by_role(application_type.source_role())
            .await?;

        // Pending and completed applications both claim their subject.
        let mut taken = HashSet::new();
        for status in [ApplicationStatus::Sent, ApplicationStatus::Done] {
            let applications = self
                .application_repository
                .find_all_by_status(status)
                .await?;
            taken.extend(
                applications
                    .into_iter()
                    .filter(|application| application.application_type() == application_type)
                    .map(|application| application.for_user().clone()),
            );
        }

        Ok(eligible
            .into_iter()
            .filter(|username| !taken.contains(username))
            .collect())
    }

    async fn handle_get(
        &self,
        query: GetApplicationQuery,
    ) -> Result<Application, ApplicationDomainError> {
        self.application_repository
            .find_by_id(query.application_id())
            .await?
            .ok_or(ApplicationDomainError::ApplicationNotFound)
    }
}
