// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use job_board_domain::{JobStatus, JobType, PageRequest, UserType, format_timestamp};
use job_board_persistence::{JobData, NewJob, Persistence};
use time::Duration;

use super::helpers::{
    create_test_admin, create_test_application_request, create_test_dispatcher,
    create_test_job_request, drain, now, setup_test_persistence,
};
use crate::{
    ApiError, Identity, JobRequest, JobResponse, close_expired_jobs, create_application,
    create_job, delete_job, find_duplicate_job, get_job, list_jobs, list_jobs_with_applications,
    update_job,
};

fn insert_expired_job(persistence: &mut Persistence, posted_by: i64, title: &str) -> JobData {
    persistence
        .create_job(&NewJob {
            title: title.to_string(),
            description: String::from("A posting whose deadline has passed."),
            company: String::from("Acme"),
            location: String::from("Kigali"),
            deadline: format_timestamp(now() - Duration::days(1)),
            job_type: JobType::Contract,
            status: JobStatus::Open,
            posted_by,
        })
        .unwrap()
}

#[test]
fn test_create_job_defaults_to_open_and_notifies_poster() {
    let mut persistence = setup_test_persistence();
    let admin: Identity = create_test_admin(&mut persistence);
    let (dispatcher, mut receiver) = create_test_dispatcher();

    let job: JobResponse = create_job(
        &mut persistence,
        &dispatcher,
        &admin,
        &create_test_job_request("Backend Engineer"),
        now(),
    )
    .unwrap();

    assert_eq!(job.status, JobStatus::Open);
    assert_eq!(job.job_type, JobType::FullTime);
    assert_eq!(job.posted_by, admin.id);
    assert_eq!(get_job(&mut persistence, job.id).unwrap(), job);

    let sent = drain(&mut receiver);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, admin.email);
}

#[test]
fn test_create_job_rejects_duplicate_identity() {
    let mut persistence = setup_test_persistence();
    let admin: Identity = create_test_admin(&mut persistence);
    let (dispatcher, _receiver) = create_test_dispatcher();
    let request: JobRequest = create_test_job_request("Backend Engineer");
    create_job(&mut persistence, &dispatcher, &admin, &request, now()).unwrap();

    let result = create_job(&mut persistence, &dispatcher, &admin, &request, now());

    assert_eq!(
        result,
        Err(ApiError::Conflict {
            message: String::from("Job with this title already exists"),
        })
    );
    assert!(
        find_duplicate_job(&mut persistence, "Backend Engineer", "Acme", "Kigali")
            .unwrap()
            .is_some()
    );
    assert!(
        find_duplicate_job(&mut persistence, "Backend Engineer", "Acme", "Nairobi")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_create_job_rejects_past_deadline() {
    let mut persistence = setup_test_persistence();
    let admin: Identity = create_test_admin(&mut persistence);
    let (dispatcher, _receiver) = create_test_dispatcher();
    let mut request: JobRequest = create_test_job_request("Backend Engineer");
    request.deadline = Some(String::from("2020-01-01"));

    let result = create_job(&mut persistence, &dispatcher, &admin, &request, now());

    assert!(matches!(result, Err(ApiError::Validation { field, .. }) if field == "deadline"));
}

#[test]
fn test_update_job_requires_status_and_replaces_fields() {
    let mut persistence = setup_test_persistence();
    let admin: Identity = create_test_admin(&mut persistence);
    let (dispatcher, _receiver) = create_test_dispatcher();
    let job: JobResponse = create_job(
        &mut persistence,
        &dispatcher,
        &admin,
        &create_test_job_request("Backend Engineer"),
        now(),
    )
    .unwrap();

    let mut request: JobRequest = create_test_job_request("Senior Backend Engineer");
    let missing_status = update_job(&mut persistence, job.id, &request, now());
    assert!(matches!(missing_status, Err(ApiError::Validation { field, .. }) if field == "status"));

    request.status = Some(String::from("closed"));
    request.job_type = Some(String::from("part-time"));
    let updated: JobResponse = update_job(&mut persistence, job.id, &request, now()).unwrap();

    assert_eq!(updated.id, job.id);
    assert_eq!(updated.title, "Senior Backend Engineer");
    assert_eq!(updated.status, JobStatus::Closed);
    assert_eq!(updated.job_type, JobType::PartTime);
}

#[test]
fn test_update_missing_job_is_not_found() {
    let mut persistence = setup_test_persistence();
    let mut request: JobRequest = create_test_job_request("Backend Engineer");
    request.status = Some(String::from("open"));

    let result = update_job(&mut persistence, 404, &request, now());

    assert_eq!(
        result,
        Err(ApiError::NotFound {
            resource_type: String::from("Job"),
            message: String::from("Job not found"),
        })
    );
}

#[test]
fn test_delete_job_refused_while_applications_exist() {
    let mut persistence = setup_test_persistence();
    let admin: Identity = create_test_admin(&mut persistence);
    let (dispatcher, _receiver) = create_test_dispatcher();
    let job: JobResponse = create_job(
        &mut persistence,
        &dispatcher,
        &admin,
        &create_test_job_request("Backend Engineer"),
        now(),
    )
    .unwrap();
    create_application(
        &mut persistence,
        &dispatcher,
        &create_test_application_request(job.id, "sam@example.com"),
        now(),
    )
    .unwrap();

    let result = delete_job(&mut persistence, job.id);

    assert_eq!(
        result,
        Err(ApiError::Forbidden {
            message: String::from("Job has applications and cannot be deleted"),
        })
    );
    assert!(get_job(&mut persistence, job.id).is_ok());
}

#[test]
fn test_delete_job_then_get_is_not_found() {
    let mut persistence = setup_test_persistence();
    let admin: Identity = create_test_admin(&mut persistence);
    let (dispatcher, _receiver) = create_test_dispatcher();
    let job: JobResponse = create_job(
        &mut persistence,
        &dispatcher,
        &admin,
        &create_test_job_request("Backend Engineer"),
        now(),
    )
    .unwrap();

    delete_job(&mut persistence, job.id).unwrap();

    assert!(matches!(
        get_job(&mut persistence, job.id),
        Err(ApiError::NotFound { .. })
    ));
    assert!(matches!(
        delete_job(&mut persistence, job.id),
        Err(ApiError::NotFound { .. })
    ));
}

#[test]
fn test_list_jobs_paginates_newest_first() {
    let mut persistence = setup_test_persistence();
    let admin: Identity = create_test_admin(&mut persistence);
    let (dispatcher, _receiver) = create_test_dispatcher();
    for title in ["First Job", "Second Job", "Third Job"] {
        create_job(
            &mut persistence,
            &dispatcher,
            &admin,
            &create_test_job_request(title),
            now(),
        )
        .unwrap();
    }

    let first_page = list_jobs(&mut persistence, PageRequest::new(Some(1), Some(2))).unwrap();
    let second_page = list_jobs(&mut persistence, PageRequest::new(Some(2), Some(2))).unwrap();

    assert_eq!(first_page.total, 3);
    assert_eq!(first_page.last_page, 2);
    assert_eq!(first_page.data.len(), 2);
    assert_eq!(first_page.data[0].title, "Third Job");
    assert_eq!(second_page.data.len(), 1);
    assert_eq!(second_page.data[0].title, "First Job");
}

#[test]
fn test_list_jobs_with_applications_groups_by_job() {
    let mut persistence = setup_test_persistence();
    let admin: Identity = create_test_admin(&mut persistence);
    let (dispatcher, _receiver) = create_test_dispatcher();
    let popular: JobResponse = create_job(
        &mut persistence,
        &dispatcher,
        &admin,
        &create_test_job_request("Popular Job"),
        now(),
    )
    .unwrap();
    create_job(
        &mut persistence,
        &dispatcher,
        &admin,
        &create_test_job_request("Quiet Job"),
        now(),
    )
    .unwrap();
    for email in ["a@example.com", "b@example.com"] {
        create_application(
            &mut persistence,
            &dispatcher,
            &create_test_application_request(popular.id, email),
            now(),
        )
        .unwrap();
    }

    let page = list_jobs_with_applications(&mut persistence, PageRequest::default()).unwrap();

    assert_eq!(page.total, 2);
    let quiet = &page.data[0];
    let busy = &page.data[1];
    assert_eq!(quiet.job.title, "Quiet Job");
    assert!(quiet.applications.is_empty());
    assert_eq!(busy.job.id, popular.id);
    assert_eq!(busy.applications.len(), 2);
}

#[test]
fn test_sweep_closes_expired_jobs_once() {
    let mut persistence = setup_test_persistence();
    let admin: Identity = create_test_admin(&mut persistence);
    let (dispatcher, _receiver) = create_test_dispatcher();
    let expired: JobData = insert_expired_job(&mut persistence, admin.id, "Expired Job");
    let live: JobResponse = create_job(
        &mut persistence,
        &dispatcher,
        &admin,
        &create_test_job_request("Live Job"),
        now(),
    )
    .unwrap();

    assert_eq!(close_expired_jobs(&mut persistence, now()).unwrap(), 1);
    assert_eq!(close_expired_jobs(&mut persistence, now()).unwrap(), 0);

    assert_eq!(
        get_job(&mut persistence, expired.id).unwrap().status,
        JobStatus::Closed
    );
    assert_eq!(get_job(&mut persistence, live.id).unwrap().status, JobStatus::Open);
}

#[test]
fn test_create_job_requires_existing_poster() {
    let mut persistence = setup_test_persistence();
    let (dispatcher, _receiver) = create_test_dispatcher();
    let ghost = Identity {
        id: 99,
        email: String::from("ghost@example.com"),
        role: UserType::Admin,
        names: String::from("Ghost"),
        profile_picture_url: String::from("https://cdn.example.com/g.png"),
    };

    let result = create_job(
        &mut persistence,
        &dispatcher,
        &ghost,
        &create_test_job_request("Backend Engineer"),
        now(),
    );

    assert_eq!(
        result,
        Err(ApiError::NotFound {
            resource_type: String::from("User"),
            message: String::from("User not found"),
        })
    );
}
