use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::{
    applications::{
        domain::{
            model::{
                commands::{
                    cast_vote_command::CastVoteCommand,
                    create_application_command::CreateApplicationCommand,
                    delete_application_command::DeleteApplicationCommand,
                },
                entities::application::Application,
                enums::{
                    application_audit_event_kind::ApplicationAuditEventKind,
                    application_domain_error::ApplicationDomainError,
                    application_status::ApplicationStatus, vote_type::VoteType,
                },
                events::{
                    application_approved_event::ApplicationApprovedEvent,
                    application_created_event::ApplicationCreatedEvent,
                },
            },
            services::{
                access_policy::AccessPolicy,
                application_command_service::ApplicationCommandService,
            },
        },
        infrastructure::persistence::repositories::{
            application_audit_event_repository::{
                ApplicationAuditEventRecord, ApplicationAuditEventRepository,
            },
            application_repository::ApplicationRepository,
        },
        interfaces::acl::user_directory_facade::UserDirectoryFacade,
    },
    config::app_config::WorkflowSettings,
};

pub struct ApplicationCommandServiceImpl {
    application_repository: Arc<dyn ApplicationRepository>,
    user_directory: Arc<dyn UserDirectoryFacade>,
    audit_event_repository: Arc<dyn ApplicationAuditEventRepository>,
    settings: WorkflowSettings,
}

impl ApplicationCommandServiceImpl {
    pub fn new(
        application_repository: Arc<dyn ApplicationRepository>,
        user_directory: Arc<dyn UserDirectoryFacade>,
        audit_event_repository: Arc<dyn ApplicationAuditEventRepository>,
        settings: WorkflowSettings,
    ) -> Self {
        Self {
            application_repository,
            user_directory,
            audit_event_repository,
            settings,
        }
    }

    async fn record_audit(&self, record: ApplicationAuditEventRecord) {
        if let Err(error) = self.audit_event_repository.append(&record).await {
            warn!(
                kind = record.kind().as_str(),
                application_id = %record.application_id().value(),
                %error,
                "failed to persist application audit event"
            );
        }
    }

    async fn ensure_no_open_duplicate(
        &self,
        command: &CreateApplicationCommand,
    ) -> Result<(), ApplicationDomainError> {
        let open = self
            .application_repository
            .find_all_by_status(ApplicationStatus::Sent)
            .await?;

        let duplicate = open.iter().any(|application| {
            application.for_user() == command.for_user()
                && application.application_type() == command.application_type()
        });

        if duplicate {
            return Err(ApplicationDomainError::DuplicateOpenApplication);
        }
        Ok(())
    }
}

#[async_trait]
impl ApplicationCommandService for ApplicationCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateApplicationCommand,
    ) -> Result<Application, ApplicationDomainError> {
        let sender = self
            .user_directory
            .find_by_username(command.from_user())
            .await?
            .ok_or(ApplicationDomainError::UserNotFound)?;

        if !AccessPolicy::can_propose(sender.role, command.application_type()) {
            return Err(ApplicationDomainError::ProposalNotAuthorized);
        }

        if self.settings.reject_duplicate_open_applications {
            self.ensure_no_open_duplicate(&command).await?;
        }

        let application = Application::new_sent(
            command.from_user().clone(),
            command.for_user().clone(),
            command.application_type(),
            Utc::now(),
        );
        let created = self.application_repository.create(application).await?;

        let event = ApplicationCreatedEvent::new(
            created.id(),
            created.from_user().clone(),
            created.for_user().clone(),
            created.application_type(),
            created.created_at(),
        );
        info!(
            application_id = %event.application_id.value(),
            from_user = %event.from_user,
            for_user = %event.for_user,
            app_type = event.application_type.as_str(),
            "application created"
        );
        self.record_audit(ApplicationAuditEventRecord::capture(
            ApplicationAuditEventKind::Created,
            &created,
            &event.from_user,
            event.occurred_at,
        ))
        .await;

        Ok(created)
    }

    async fn handle_cast_vote(
        &self,
        command: CastVoteCommand,
    ) -> Result<(), ApplicationDomainError> {
        let voter = self
            .user_directory
            .find_by_username(command.voter())
            .await?
            .filter(|voter| AccessPolicy::can_vote(voter.role))
            .ok_or(ApplicationDomainError::OnlyAdminsCanVote)?;

        let vote_type = command.vote_type();
        let threshold = self.settings.quorum_threshold;
        let voter_name = voter.username.clone();
        let now = Utc::now();

        let (application, promotion) = self
            .application_repository
            .update(
                command.application_id(),
                Box::new(move |application| {
                    if !application.is_open() {
                        return Err(ApplicationDomainError::ApplicationNotFound);
                    }
                    match vote_type {
                        VoteType::Vote => application.add_vote(voter_name, now)?,
                        VoteType::Unvote => application.remove_vote(&voter_name, now)?,
                    }
                    application.settle_quorum(threshold, now)
                }),
            )
            .await?;

        debug!(
            application_id = %application.id().value(),
            voter = %voter.username,
            vote_type = vote_type.as_str(),
            votes = application.admin_votes().len(),
            "vote recorded"
        );
        let kind = match vote_type {
            VoteType::Vote => ApplicationAuditEventKind::VoteCast,
            VoteType::Unvote => ApplicationAuditEventKind::VoteWithdrawn,
        };
        self.record_audit(ApplicationAuditEventRecord::capture(
            kind,
            &application,
            &voter.username,
            now,
        ))
        .await;

        if let Some(promotion) = promotion {
            let event = ApplicationApprovedEvent::new(application.id(), promotion, now);
            info!(
                application_id = %event.application_id.value(),
                username = %event.promotion.username,
                role = event.promotion.role.as_str(),
                "application reached quorum; user promoted"
            );
            self.record_audit(
                ApplicationAuditEventRecord::capture(
                    ApplicationAuditEventKind::Approved,
                    &application,
                    &voter.username,
                    event.occurred_at,
                )
                .with_promotion(&event.promotion),
            )
            .await;
        }

        Ok(())
    }

    async fn handle_delete(
        &self,
        command: DeleteApplicationCommand,
    ) -> Result<(), ApplicationDomainError> {
        let existing = self
            .application_repository
            .find_by_id(command.application_id())
            .await?
            .ok_or(ApplicationDomainError::ApplicationNotFound)?;

        let requester = self
            .user_directory
            .find_by_username(command.requested_by())
            .await?
            .filter(|user| AccessPolicy::can_delete(&user.username, user.role, &existing))
            .ok_or(ApplicationDomainError::DeleteNotAuthorized)?;

        if !existing.is_open() {
            debug!(
                application_id = %existing.id().value(),
                status = existing.status().as_str(),
                "application already closed; delete is a no-op"
            );
            return Ok(());
        }

        let now = Utc::now();
        let (application, _) = self
            .application_repository
            .update(
                command.application_id(),
                Box::new(move |application| {
                    if application.is_open() {
                        application.mark_deleted(now)?;
                    }
                    Ok(None)
                }),
            )
            .await?;

        if application.status() == ApplicationStatus::Deleted {
            info!(
                application_id = %application.id().value(),
                requested_by = %requester.username,
                "application deleted"
            );
            self.record_audit(ApplicationAuditEventRecord::capture(
                ApplicationAuditEventKind::Deleted,
                &application,
                &requester.username,
                now,
            ))
            .await;
        }

        Ok(())
    }
}
