use membership_applications_api::{
    applications::domain::{
        model::enums::{
            application_audit_event_kind::ApplicationAuditEventKind,
            application_domain_error::ApplicationDomainError,
            application_status::ApplicationStatus, application_type::ApplicationType,
        },
        services::application_command_service::ApplicationCommandService,
    },
    config::app_config::WorkflowSettings,
    shared::domain::model::enums::user_role::UserRole,
};

use crate::support::{
    COMMUNITY, FakeAuditEventRepository, application_with_status, create_command, create_harness,
    create_harness_with, delete_command, unvote_command, username, vote_command,
};

#[tokio::test]
async fn admin_proposal_walks_through_votes_to_promotion() {
    let harness = create_harness(COMMUNITY);

    // alice proposes bob for admin
    let created = harness
        .command_service
        .handle_create(create_command("alice", "bob", "admin"))
        .await
        .expect("application created");
    assert_eq!(created.status(), ApplicationStatus::Sent);
    assert!(created.admin_votes().is_empty());
    assert_eq!(created.application_type(), ApplicationType::Admin);

    // first admin vote keeps it open
    harness
        .command_service
        .handle_cast_vote(vote_command(created.id(), "carol"))
        .await
        .expect("carol votes");
    let after_first = harness.store.application(created.id()).unwrap();
    assert_eq!(after_first.admin_votes(), &[username("carol")]);
    assert_eq!(after_first.status(), ApplicationStatus::Sent);
    assert_eq!(harness.store.role_of("bob"), Some(UserRole::Member));

    // second distinct admin reaches quorum
    harness
        .command_service
        .handle_cast_vote(vote_command(created.id(), "dave"))
        .await
        .expect("dave votes");
    let after_second = harness.store.application(created.id()).unwrap();
    assert_eq!(after_second.status(), ApplicationStatus::Done);
    assert_eq!(harness.store.role_of("bob"), Some(UserRole::Admin));
    assert_eq!(harness.store.promotions().len(), 1);

    // closed applications no longer accept votes
    let result = harness
        .command_service
        .handle_cast_vote(vote_command(created.id(), "carol"))
        .await;
    assert!(matches!(
        result,
        Err(ApplicationDomainError::ApplicationNotFound)
    ));

    let events = harness.audit_repository.saved_events();
    assert_eq!(
        harness.audit_repository.saved_kinds(),
        vec![
            ApplicationAuditEventKind::Created,
            ApplicationAuditEventKind::VoteCast,
            ApplicationAuditEventKind::VoteCast,
            ApplicationAuditEventKind::Approved,
        ]
    );
    assert_eq!(
        events.iter().map(|event| event.vote_count()).collect::<Vec<_>>(),
        vec![0, 1, 2, 2]
    );
    assert_eq!(events[0].actor(), &username("alice"));
    assert_eq!(events[3].actor(), &username("dave"));
    assert_eq!(events[3].for_user(), &username("bob"));
    assert_eq!(events[3].status(), ApplicationStatus::Done);
    assert_eq!(events[3].promoted_role(), Some(UserRole::Admin));
    assert!(events[..3].iter().all(|event| event.promoted_role().is_none()));
}

#[tokio::test]
async fn member_application_promotes_bro_to_member() {
    let harness = create_harness(COMMUNITY);

    let created = harness
        .command_service
        .handle_create(create_command("erin", "gus", "member"))
        .await
        .unwrap();
    for voter in ["alice", "frank"] {
        harness
            .command_service
            .handle_cast_vote(vote_command(created.id(), voter))
            .await
            .unwrap();
    }

    assert_eq!(harness.store.role_of("gus"), Some(UserRole::Member));
    assert_eq!(
        harness.store.application(created.id()).unwrap().status(),
        ApplicationStatus::Done
    );
}

#[tokio::test]
async fn member_application_naming_an_admin_sets_them_to_member() {
    let harness = create_harness(COMMUNITY);

    // creation does not check the subject's current role
    let created = harness
        .command_service
        .handle_create(create_command("alice", "frank", "member"))
        .await
        .unwrap();
    for voter in ["carol", "dave"] {
        harness
            .command_service
            .handle_cast_vote(vote_command(created.id(), voter))
            .await
            .unwrap();
    }

    assert_eq!(harness.store.role_of("frank"), Some(UserRole::Member));
    assert_eq!(harness.store.promotions()[0].role, UserRole::Member);
}

#[tokio::test]
async fn non_admin_voter_is_forbidden() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &[],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    let result = harness
        .command_service
        .handle_cast_vote(vote_command(application_id, "erin"))
        .await;

    assert!(matches!(result, Err(ApplicationDomainError::OnlyAdminsCanVote)));
    assert!(
        harness
            .store
            .application(application_id)
            .unwrap()
            .admin_votes()
            .is_empty()
    );
    assert!(harness.audit_repository.saved_events().is_empty());
}

#[tokio::test]
async fn unknown_voter_is_forbidden() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &[],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    let result = harness
        .command_service
        .handle_cast_vote(vote_command(application_id, "mallory"))
        .await;

    assert!(matches!(result, Err(ApplicationDomainError::OnlyAdminsCanVote)));
}

#[tokio::test]
async fn voting_on_unknown_application_is_not_found() {
    let harness = create_harness(COMMUNITY);
    let missing = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &[],
    );

    let result = harness
        .command_service
        .handle_cast_vote(vote_command(missing.id(), "carol"))
        .await;

    assert!(matches!(
        result,
        Err(ApplicationDomainError::ApplicationNotFound)
    ));
}

#[tokio::test]
async fn voting_on_deleted_application_is_not_found() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Deleted,
        &[],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    let result = harness
        .command_service
        .handle_cast_vote(vote_command(application_id, "carol"))
        .await;

    assert!(matches!(
        result,
        Err(ApplicationDomainError::ApplicationNotFound)
    ));
}

#[tokio::test]
async fn repeated_vote_conflicts_and_keeps_a_single_entry() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &["carol"],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    let result = harness
        .command_service
        .handle_cast_vote(vote_command(application_id, "carol"))
        .await;

    assert!(matches!(result, Err(ApplicationDomainError::AlreadyVoted)));
    let stored = harness.store.application(application_id).unwrap();
    assert_eq!(stored.admin_votes(), &[username("carol")]);
    assert_eq!(stored.status(), ApplicationStatus::Sent);
}

#[tokio::test]
async fn unvote_removes_only_the_callers_vote() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &["carol"],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    harness
        .command_service
        .handle_cast_vote(unvote_command(application_id, "carol"))
        .await
        .expect("unvote succeeds");

    let stored = harness.store.application(application_id).unwrap();
    assert!(stored.admin_votes().is_empty());
    assert_eq!(stored.status(), ApplicationStatus::Sent);
    let events = harness.audit_repository.saved_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind(), ApplicationAuditEventKind::VoteWithdrawn);
    assert_eq!(events[0].vote_count(), 0);
}

#[tokio::test]
async fn unvote_without_prior_vote_conflicts() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &["carol"],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    let result = harness
        .command_service
        .handle_cast_vote(unvote_command(application_id, "dave"))
        .await;

    assert!(matches!(result, Err(ApplicationDomainError::VoteNotFound)));
    assert_eq!(
        harness.store.application(application_id).unwrap().admin_votes(),
        &[username("carol")]
    );
}

#[tokio::test]
async fn withdrawn_vote_does_not_count_towards_quorum() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &[],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    let service = &harness.command_service;
    service
        .handle_cast_vote(vote_command(application_id, "carol"))
        .await
        .unwrap();
    service
        .handle_cast_vote(unvote_command(application_id, "carol"))
        .await
        .unwrap();
    service
        .handle_cast_vote(vote_command(application_id, "dave"))
        .await
        .unwrap();

    let stored = harness.store.application(application_id).unwrap();
    assert_eq!(stored.status(), ApplicationStatus::Sent);
    assert_eq!(stored.admin_votes(), &[username("dave")]);
    assert_eq!(harness.store.role_of("bob"), Some(UserRole::Member));
}

#[tokio::test]
async fn configured_quorum_threshold_is_respected() {
    let harness = create_harness_with(
        COMMUNITY,
        WorkflowSettings {
            quorum_threshold: 3,
            ..WorkflowSettings::default()
        },
        FakeAuditEventRepository::new(),
    );
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &[],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    for voter in ["carol", "dave"] {
        harness
            .command_service
            .handle_cast_vote(vote_command(application_id, voter))
            .await
            .unwrap();
    }
    assert_eq!(
        harness.store.application(application_id).unwrap().status(),
        ApplicationStatus::Sent
    );

    harness
        .command_service
        .handle_cast_vote(vote_command(application_id, "frank"))
        .await
        .unwrap();
    assert_eq!(
        harness.store.application(application_id).unwrap().status(),
        ApplicationStatus::Done
    );
    assert_eq!(harness.store.role_of("bob"), Some(UserRole::Admin));
}

#[tokio::test]
async fn promotion_of_missing_user_rolls_back_the_vote() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &["carol"],
    );
    let application_id = application.id();
    harness.store.insert_application(application);
    harness.store.remove_user("bob");

    let result = harness
        .command_service
        .handle_cast_vote(vote_command(application_id, "dave"))
        .await;

    assert!(matches!(result, Err(ApplicationDomainError::UserNotFound)));
    let stored = harness.store.application(application_id).unwrap();
    assert_eq!(stored.status(), ApplicationStatus::Sent);
    assert_eq!(stored.admin_votes(), &[username("carol")]);
    assert!(harness.store.promotions().is_empty());
}

#[tokio::test]
async fn audit_failures_do_not_fail_the_vote() {
    let harness = create_harness_with(
        COMMUNITY,
        WorkflowSettings::default(),
        FakeAuditEventRepository::failing(),
    );
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &["carol"],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    harness
        .command_service
        .handle_cast_vote(vote_command(application_id, "dave"))
        .await
        .expect("vote succeeds even though auditing fails");

    assert_eq!(harness.store.role_of("bob"), Some(UserRole::Admin));
    assert!(harness.audit_repository.saved_events().is_empty());
}

#[tokio::test]
async fn bro_cannot_propose_anyone() {
    let harness = create_harness(COMMUNITY);

    let result = harness
        .command_service
        .handle_create(create_command("gus", "hana", "member"))
        .await;

    assert!(matches!(
        result,
        Err(ApplicationDomainError::ProposalNotAuthorized)
    ));
    assert_eq!(harness.store.application_count(), 0);
}

#[tokio::test]
async fn member_cannot_propose_admin_applications() {
    let harness = create_harness(COMMUNITY);

    let result = harness
        .command_service
        .handle_create(create_command("erin", "bob", "admin"))
        .await;

    assert!(matches!(
        result,
        Err(ApplicationDomainError::ProposalNotAuthorized)
    ));
    assert_eq!(harness.store.application_count(), 0);
}

#[tokio::test]
async fn unknown_sender_is_not_found() {
    let harness = create_harness(COMMUNITY);

    let result = harness
        .command_service
        .handle_create(create_command("mallory", "gus", "member"))
        .await;

    assert!(matches!(result, Err(ApplicationDomainError::UserNotFound)));
}

#[tokio::test]
async fn duplicate_open_applications_are_allowed_by_default() {
    let harness = create_harness(COMMUNITY);

    for from in ["erin", "bob"] {
        harness
            .command_service
            .handle_create(create_command(from, "gus", "member"))
            .await
            .expect("duplicate accepted");
    }

    assert_eq!(harness.store.application_count(), 2);
}

#[tokio::test]
async fn duplicate_open_applications_can_be_rejected() {
    let harness = create_harness_with(
        COMMUNITY,
        WorkflowSettings {
            reject_duplicate_open_applications: true,
            ..WorkflowSettings::default()
        },
        FakeAuditEventRepository::new(),
    );

    harness
        .command_service
        .handle_create(create_command("erin", "gus", "member"))
        .await
        .unwrap();
    let duplicate = harness
        .command_service
        .handle_create(create_command("bob", "gus", "member"))
        .await;
    let other_subject = harness
        .command_service
        .handle_create(create_command("bob", "hana", "member"))
        .await;

    assert!(matches!(
        duplicate,
        Err(ApplicationDomainError::DuplicateOpenApplication)
    ));
    assert!(other_subject.is_ok());
    assert_eq!(harness.store.application_count(), 2);
}

#[tokio::test]
async fn delete_marks_open_application_deleted() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &["carol"],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    harness
        .command_service
        .handle_delete(delete_command(application_id, "carol"))
        .await
        .expect("delete succeeds");

    let stored = harness.store.application(application_id).unwrap();
    assert_eq!(stored.status(), ApplicationStatus::Deleted);
    assert_eq!(stored.admin_votes(), &[username("carol")]);
    let events = harness.audit_repository.saved_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind(), ApplicationAuditEventKind::Deleted);
    assert_eq!(events[0].actor(), &username("carol"));
    assert_eq!(events[0].status(), ApplicationStatus::Deleted);
    assert_eq!(events[0].vote_count(), 1);
}

#[tokio::test]
async fn delete_is_a_no_op_on_closed_applications() {
    let harness = create_harness(COMMUNITY);
    let deleted = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Deleted,
        &["carol"],
    );
    let done = application_with_status(
        "erin",
        "gus",
        ApplicationType::Member,
        ApplicationStatus::Done,
        &["carol", "dave"],
    );
    let (deleted_id, done_id) = (deleted.id(), done.id());
    harness.store.insert_application(deleted);
    harness.store.insert_application(done);

    for application_id in [deleted_id, done_id] {
        harness
            .command_service
            .handle_delete(delete_command(application_id, "alice"))
            .await
            .expect("closed delete is accepted");
    }

    let deleted = harness.store.application(deleted_id).unwrap();
    assert_eq!(deleted.status(), ApplicationStatus::Deleted);
    assert_eq!(deleted.admin_votes(), &[username("carol")]);
    assert_eq!(deleted.from_user(), &username("alice"));
    assert_eq!(deleted.for_user(), &username("bob"));
    assert_eq!(
        harness.store.application(done_id).unwrap().status(),
        ApplicationStatus::Done
    );
    assert!(harness.audit_repository.saved_events().is_empty());
}

#[tokio::test]
async fn delete_of_unknown_application_is_not_found() {
    let harness = create_harness(COMMUNITY);
    let missing = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &[],
    );

    let result = harness
        .command_service
        .handle_delete(delete_command(missing.id(), "alice"))
        .await;

    assert!(matches!(
        result,
        Err(ApplicationDomainError::ApplicationNotFound)
    ));
}

#[tokio::test]
async fn bro_cannot_delete_someone_elses_application() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &[],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    let result = harness
        .command_service
        .handle_delete(delete_command(application_id, "gus"))
        .await;

    assert!(matches!(
        result,
        Err(ApplicationDomainError::DeleteNotAuthorized)
    ));
    assert_eq!(
        harness.store.application(application_id).unwrap().status(),
        ApplicationStatus::Sent
    );
    assert!(harness.audit_repository.saved_events().is_empty());
}

#[tokio::test]
async fn only_the_proposing_member_may_withdraw_a_member_application() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "erin",
        "gus",
        ApplicationType::Member,
        ApplicationStatus::Sent,
        &[],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    let other_member = harness
        .command_service
        .handle_delete(delete_command(application_id, "bob"))
        .await;
    assert!(matches!(
        other_member,
        Err(ApplicationDomainError::DeleteNotAuthorized)
    ));

    harness
        .command_service
        .handle_delete(delete_command(application_id, "erin"))
        .await
        .expect("proposer withdraws");
    assert_eq!(
        harness.store.application(application_id).unwrap().status(),
        ApplicationStatus::Deleted
    );
}

#[tokio::test]
async fn unknown_requester_cannot_delete() {
    let harness = create_harness(COMMUNITY);
    let application = application_with_status(
        "alice",
        "bob",
        ApplicationType::Admin,
        ApplicationStatus::Sent,
        &[],
    );
    let application_id = application.id();
    harness.store.insert_application(application);

    let result = harness
        .command_service
        .handle_delete(delete_command(application_id, "mallory"))
        .await;

    assert!(matches!(
        result,
        Err(ApplicationDomainError::DeleteNotAuthorized)
    ));
}
