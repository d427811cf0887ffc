use chrono::{Duration, Utc};
use membership_applications_api::{
    applications::domain::model::{
        commands::{
            cast_vote_command::CastVoteCommand,
            create_application_command::CreateApplicationCommand,
            delete_application_command::DeleteApplicationCommand,
        },
        entities::application::{Application, ApplicationSnapshot},
        enums::{application_status::ApplicationStatus, application_type::ApplicationType},
        queries::list_applications_query::ListApplicationsQuery,
        value_objects::application_id::ApplicationId,
    },
    shared::domain::model::{enums::user_role::UserRole, value_objects::username::Username},
};

/// alice and carol, dave, frank are admins; bob and erin are members;
/// gus and hana are bros.
pub const COMMUNITY: &[(&str, UserRole)] = &[
    ("alice", UserRole::Admin),
    ("bob", UserRole::Member),
    ("carol", UserRole::Admin),
    ("dave", UserRole::Admin),
    ("erin", UserRole::Member),
    ("frank", UserRole::Admin),
    ("gus", UserRole::Bro),
    ("hana", UserRole::Bro),
];

pub fn username(value: &str) -> Username {
    Username::new(value).expect("valid username")
}

pub fn create_command(from: &str, for_user: &str, app_type: &str) -> CreateApplicationCommand {
    CreateApplicationCommand::new(from.to_string(), for_user.to_string(), app_type.to_string())
        .expect("valid create command")
}

pub fn vote_command(application_id: ApplicationId, voter: &str) -> CastVoteCommand {
    CastVoteCommand::new(
        application_id.value().to_string(),
        voter.to_string(),
        "vote".to_string(),
    )
    .expect("valid vote command")
}

pub fn unvote_command(application_id: ApplicationId, voter: &str) -> CastVoteCommand {
    CastVoteCommand::new(
        application_id.value().to_string(),
        voter.to_string(),
        "unvote".to_string(),
    )
    .expect("valid unvote command")
}

pub fn delete_command(
    application_id: ApplicationId,
    requested_by: &str,
) -> DeleteApplicationCommand {
    DeleteApplicationCommand::new(application_id.value().to_string(), requested_by.to_string())
        .expect("valid delete command")
}

pub fn list_query(viewer: &str, page: &str) -> ListApplicationsQuery {
    ListApplicationsQuery::new(viewer.to_string(), page.to_string()).expect("valid list query")
}

/// An open application created `age_minutes` ago.
pub fn sent_application(
    from: &str,
    for_user: &str,
    application_type: ApplicationType,
    age_minutes: i64,
) -> Application {
    Application::new_sent(
        username(from),
        username(for_user),
        application_type,
        Utc::now() - Duration::minutes(age_minutes),
    )
}

pub fn application_with_status(
    from: &str,
    for_user: &str,
    application_type: ApplicationType,
    status: ApplicationStatus,
    admin_votes: &[&str],
) -> Application {
    let created_at = Utc::now() - Duration::hours(1);

    Application::restore(ApplicationSnapshot {
        id: ApplicationId::new_random(),
        from_user: username(from),
        for_user: username(for_user),
        application_type,
        status,
        admin_votes: admin_votes.iter().map(|voter| username(voter)).collect(),
        created_at,
        updated_at: created_at,
    })
}
