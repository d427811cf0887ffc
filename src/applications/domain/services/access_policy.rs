use crate::{
    applications::domain::model::{
        entities::application::Application,
        enums::{
            application_domain_error::ApplicationDomainError, application_type::ApplicationType,
            page_context::PageContext,
        },
    },
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
};

/// Role-based visibility and permission rules for applications.
///
/// Roles are always passed in by the caller; the policy never looks them up,
/// so a decision is made against exactly the snapshot the caller holds.
pub struct AccessPolicy;

impl AccessPolicy {
    /// Filters `applications` down to what `viewer` may see on `page_context`.
    /// Only open applications are ever returned and input order is preserved.
    pub fn visible_applications(
        viewer: &Username,
        viewer_role: UserRole,
        page_context: PageContext,
        applications: Vec<Application>,
    ) -> Result<Vec<Application>, ApplicationDomainError> {
        let open = applications.into_iter().filter(Application::is_open);

        let visible = match (page_context, viewer_role) {
            (PageContext::AdminPage, UserRole::Admin) => open
                .filter(|application| application.from_user() != viewer)
                .collect(),
            (PageContext::AdminPage, _) => {
                return Err(ApplicationDomainError::PageNotAuthorized);
            }
            (PageContext::MemberPage, UserRole::Admin) => open
                .filter(|application| application.from_user() == viewer)
                .collect(),
            (PageContext::MemberPage, UserRole::Member) => open
                .filter(|application| {
                    application.from_user() == viewer
                        && application.application_type() == ApplicationType::Member
                })
                .collect(),
            (PageContext::MemberPage, UserRole::Bro) => open
                .filter(|application| {
                    application.for_user() == viewer
                        && application.application_type() == ApplicationType::Member
                })
                .collect(),
        };

        Ok(visible)
    }

    pub fn can_vote(viewer_role: UserRole) -> bool {
        viewer_role == UserRole::Admin
    }

    /// The proposer may withdraw their own application; admins may remove any.
    pub fn can_delete(viewer: &Username, viewer_role: UserRole, application: &Application) -> bool {
        viewer_role == UserRole::Admin || application.from_user() == viewer
    }

    pub fn can_propose(sender_role: UserRole, requested_type: ApplicationType) -> bool {
        match (sender_role, requested_type) {
            (UserRole::Bro, _) => false,
            (UserRole::Member, ApplicationType::Admin) => false,
            (UserRole::Member, ApplicationType::Member) => true,
            (UserRole::Admin, _) => true,
        }
    }
}
