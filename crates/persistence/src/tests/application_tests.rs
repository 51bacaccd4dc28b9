// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use job_board_domain::{ApplicationStatus, Page, PageRequest};

use crate::tests::{
    create_test_application, create_test_job, create_test_new_application,
    create_test_persistence, create_test_user,
};
use crate::{ApplicationData, ApplicationUpdate, JobData, Persistence, PersistenceError};

fn setup() -> (Persistence, JobData) {
    let mut persistence: Persistence = create_test_persistence();
    let admin = create_test_user(&mut persistence, "admin@example.com");
    let job: JobData = create_test_job(&mut persistence, admin.id, "Rust Engineer");
    (persistence, job)
}

#[test]
fn test_new_application_is_pending() {
    let (mut persistence, job) = setup();

    let application: ApplicationData =
        create_test_application(&mut persistence, job.id, "seeker@example.com");

    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.job_id, job.id);
    assert_eq!(application.phone_number.as_deref(), Some("+250788123456"));
    assert_eq!(application.linked_in_profile, None);
    assert_eq!(application.applied_at, application.updated_at);
}

#[test]
fn test_application_for_missing_job_is_rejected_by_foreign_key() {
    let mut persistence: Persistence = create_test_persistence();

    let result =
        persistence.create_application(&create_test_new_application(123, "seeker@example.com"));

    assert!(result.is_err());
}

#[test]
fn test_find_application_by_job_and_email() {
    let (mut persistence, job) = setup();
    let application: ApplicationData =
        create_test_application(&mut persistence, job.id, "seeker@example.com");

    assert_eq!(
        persistence
            .find_application_by_job_and_email(job.id, "seeker@example.com")
            .unwrap(),
        Some(application)
    );
    assert_eq!(
        persistence
            .find_application_by_job_and_email(job.id, "other@example.com")
            .unwrap(),
        None
    );
}

#[test]
fn test_list_applications_paginates_newest_first() {
    let (mut persistence, job) = setup();
    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        create_test_application(&mut persistence, job.id, email);
    }

    let page: Page<ApplicationData> = persistence
        .list_applications(PageRequest::new(Some(1), Some(2)))
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.last_page, 2);
    assert_eq!(page.data[0].email, "c@example.com");
    assert_eq!(page.data[1].email, "b@example.com");
    assert_eq!(persistence.list_applications_for_job(job.id).unwrap().len(), 3);
}

#[test]
fn test_partial_update_leaves_other_fields() {
    let (mut persistence, job) = setup();
    let application: ApplicationData =
        create_test_application(&mut persistence, job.id, "seeker@example.com");

    let updated: ApplicationData = persistence
        .update_application(
            application.id,
            &ApplicationUpdate {
                status: Some(ApplicationStatus::InterviewScheduled),
                ..ApplicationUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::InterviewScheduled);
    assert_eq!(updated.email, application.email);
    assert_eq!(updated.cover_letter, application.cover_letter);
    assert_eq!(updated.phone_number, application.phone_number);
}

#[test]
fn test_update_missing_application_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = persistence.update_application(5, &ApplicationUpdate::default());

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_application_then_job() {
    let (mut persistence, job) = setup();
    let application: ApplicationData =
        create_test_application(&mut persistence, job.id, "seeker@example.com");

    persistence.delete_application(application.id).unwrap();

    assert_eq!(persistence.get_application_by_id(application.id).unwrap(), None);
    assert!(matches!(
        persistence.delete_application(application.id),
        Err(PersistenceError::NotFound(_))
    ));
    persistence.delete_job(job.id).unwrap();
}
