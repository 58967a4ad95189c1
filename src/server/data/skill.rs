use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository for the skill catalogue and volunteer skill links
pub struct SkillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SkillRepository<'a, C> {
    /// Creates a new instance of [`SkillRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Number of skills in the catalogue
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Skill::find().count(self.db).await
    }

    /// Skills with the given IDs, unknown IDs are skipped
    pub async fn get_many_by_ids(&self, skill_ids: &[i32]) -> Result<Vec<entity::skill::Model>, DbErr> {
        entity::prelude::Skill::find()
            .filter(entity::skill::Column::Id.is_in(skill_ids.to_vec()))
            .order_by_asc(entity::skill::Column::Id)
            .all(self.db)
            .await
    }

    /// Links skills to a volunteer in one batch insert
    pub async fn link_to_volunteer(&self, volunteer_id: i32, skill_ids: &[i32]) -> Result<(), DbErr> {
        if skill_ids.is_empty() {
            return Ok(());
        }

        let links = skill_ids
            .iter()
            .map(|skill_id| entity::volunteer_skill::ActiveModel {
                volunteer_id: sea_orm::ActiveValue::Set(volunteer_id),
                skill_id: sea_orm::ActiveValue::Set(*skill_id),
            });

        entity::prelude::VolunteerSkill::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Skill IDs linked to a volunteer, ascending
    pub async fn get_ids_by_volunteer(&self, volunteer_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::VolunteerSkill::find()
            .filter(entity::volunteer_skill::Column::VolunteerId.eq(volunteer_id))
            .order_by_asc(entity::volunteer_skill::Column::SkillId)
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.skill_id).collect())
    }
}
