//! Tests for AidRequestService::list and AidRequestService::list_by_user.

use entity::sea_orm_active_enums::{AidRequestStatus, UserRole};
use relief::server::{
    error::{auth::AuthError, domain::DomainError, Error},
    model::context::RequestContext,
    service::aid::request::AidRequestService,
};
use relief_test_utils::prelude::*;

/// Tests staff listing every request.
///
/// Expected: Ok with the requests of all users
#[tokio::test]
async fn staff_lists_every_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let volunteer = test.relief().insert_user(UserRole::Volunteer).await?;
    let ana = test.relief().insert_user(UserRole::User).await?;
    let ben = test.relief().insert_user(UserRole::User).await?;
    test.relief()
        .insert_aid_request(ana.id, AidRequestStatus::Pending)
        .await?;
    test.relief()
        .insert_aid_request(ben.id, AidRequestStatus::Approved)
        .await?;
    let ctx = RequestContext::new(volunteer.id, volunteer.role);

    let result = AidRequestService::new(&test.db).list(&ctx).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);

    Ok(())
}

/// Tests a plain user listing every request.
///
/// Expected: Err with AuthError::Forbidden
#[tokio::test]
async fn list_forbids_plain_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let user = test.relief().insert_user(UserRole::User).await?;
    let ctx = RequestContext::new(user.id, user.role);

    let result = AidRequestService::new(&test.db).list(&ctx).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::Forbidden { .. }))
    ));

    Ok(())
}

/// Tests a user listing their own requests.
///
/// Verifies that requests filed by other users are left out.
///
/// Expected: Ok with only the caller's requests
#[tokio::test]
async fn user_lists_own_requests() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ana = test.relief().insert_user(UserRole::User).await?;
    let ben = test.relief().insert_user(UserRole::User).await?;
    let own = test
        .relief()
        .insert_aid_request(ana.id, AidRequestStatus::Pending)
        .await?;
    test.relief()
        .insert_aid_request(ben.id, AidRequestStatus::Pending)
        .await?;
    let ctx = RequestContext::new(ana.id, ana.role);

    let result = AidRequestService::new(&test.db)
        .list_by_user(&ctx, ana.id)
        .await;

    assert!(result.is_ok());
    let requests = result.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, own.id);

    Ok(())
}

/// Tests a user listing another user's requests.
///
/// Expected: Err with AuthError::Forbidden
#[tokio::test]
async fn forbids_listing_another_users_requests() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ana = test.relief().insert_user(UserRole::User).await?;
    let ben = test.relief().insert_user(UserRole::User).await?;
    let ctx = RequestContext::new(ben.id, ben.role);

    let result = AidRequestService::new(&test.db)
        .list_by_user(&ctx, ana.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::Forbidden { .. }))
    ));

    Ok(())
}

/// Tests staff listing the requests of an unknown user.
///
/// Expected: Err with UserNotFound
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = AidRequestService::new(&test.db)
        .list_by_user(&ctx, 777)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::UserNotFound(777)))
    ));

    Ok(())
}
