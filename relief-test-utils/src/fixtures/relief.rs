use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use entity::sea_orm_active_enums::{
    AidRequestStatus, PreparationStatus, TrackingStatus, UserRole, VolunteerStatus,
};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

static NEXT_USER: AtomicU32 = AtomicU32::new(1);

impl TestContext {
    pub fn relief<'a>(&'a self) -> ReliefFixtures<'a> {
        ReliefFixtures { setup: self }
    }
}

pub struct ReliefFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReliefFixtures<'a> {
    /// Insert a user with a generated unique email.
    pub async fn insert_user(&self, role: UserRole) -> Result<entity::app_user::Model, TestError> {
        let n = NEXT_USER.fetch_add(1, Ordering::Relaxed);
        self.insert_user_with_email(&format!("user{}@relief.test", n), role)
            .await
    }

    pub async fn insert_user_with_email(
        &self,
        email: &str,
        role: UserRole,
    ) -> Result<entity::app_user::Model, TestError> {
        let now = Utc::now().naive_utc();
        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                name: ActiveValue::Set("Test User".to_string()),
                phone_no: ActiveValue::Set("555-0100".to_string()),
                role: ActiveValue::Set(role),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_center(
        &self,
        name: &str,
        max_capacity: i32,
    ) -> Result<entity::relief_center::Model, TestError> {
        let now = Utc::now().naive_utc();
        Ok(
            entity::prelude::ReliefCenter::insert(entity::relief_center::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                location: ActiveValue::Set("Test Location".to_string()),
                volunteer_count: ActiveValue::Set(0),
                max_capacity: ActiveValue::Set(max_capacity),
                manager_id: ActiveValue::Set(None),
                version: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a stock row; `type_key` is derived the same way the ledger derives it.
    pub async fn insert_resource(
        &self,
        center_id: i32,
        resource_type: &str,
        quantity: i32,
    ) -> Result<entity::resource::Model, TestError> {
        let now = Utc::now().naive_utc();
        Ok(
            entity::prelude::Resource::insert(entity::resource::ActiveModel {
                center_id: ActiveValue::Set(center_id),
                resource_type: ActiveValue::Set(resource_type.trim().to_string()),
                type_key: ActiveValue::Set(resource_type.trim().to_lowercase()),
                quantity: ActiveValue::Set(quantity),
                expires_at: ActiveValue::Set(None),
                version: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_skill(&self, name: &str) -> Result<entity::skill::Model, TestError> {
        Ok(
            entity::prelude::Skill::insert(entity::skill::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a volunteer row without touching the center's cached count.
    pub async fn insert_volunteer(
        &self,
        user_id: i32,
        assigned_center_id: Option<i32>,
        status: VolunteerStatus,
    ) -> Result<entity::volunteer::Model, TestError> {
        let now = Utc::now().naive_utc();
        Ok(
            entity::prelude::Volunteer::insert(entity::volunteer::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                assigned_center_id: ActiveValue::Set(assigned_center_id),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user with the volunteer role together with their volunteer row.
    pub async fn insert_user_volunteer(
        &self,
        assigned_center_id: Option<i32>,
        status: VolunteerStatus,
    ) -> Result<(entity::app_user::Model, entity::volunteer::Model), TestError> {
        let user = self.insert_user(UserRole::Volunteer).await?;
        let volunteer = self
            .insert_volunteer(user.id, assigned_center_id, status)
            .await?;

        Ok((user, volunteer))
    }

    pub async fn insert_aid_request(
        &self,
        user_id: i32,
        status: AidRequestStatus,
    ) -> Result<entity::aid_request::Model, TestError> {
        let now = Utc::now().naive_utc();
        Ok(
            entity::prelude::AidRequest::insert(entity::aid_request::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                area_id: ActiveValue::Set(1),
                request_type: ActiveValue::Set("Medical".to_string()),
                description: ActiveValue::Set("Test request".to_string()),
                urgency: ActiveValue::Set("High".to_string()),
                status: ActiveValue::Set(status),
                people_count: ActiveValue::Set(4),
                request_date: ActiveValue::Set(now),
                response_time: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_preparation(
        &self,
        request_id: i32,
        status: PreparationStatus,
    ) -> Result<entity::aid_preparation::Model, TestError> {
        let now = Utc::now().naive_utc();
        Ok(
            entity::prelude::AidPreparation::insert(entity::aid_preparation::ActiveModel {
                request_id: ActiveValue::Set(request_id),
                departure_time: ActiveValue::Set(None),
                estimated_arrival: ActiveValue::Set(None),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_tracking(
        &self,
        request_id: i32,
        status: TrackingStatus,
    ) -> Result<entity::rescue_tracking::Model, TestError> {
        let now = Utc::now().naive_utc();
        let completion_time = match status {
            TrackingStatus::Completed => Some(now),
            _ => None,
        };
        Ok(
            entity::prelude::RescueTracking::insert(entity::rescue_tracking::ActiveModel {
                request_id: ActiveValue::Set(request_id),
                status: ActiveValue::Set(status),
                start_time: ActiveValue::Set(Some(now)),
                completion_time: ActiveValue::Set(completion_time),
                people_helped: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
