use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000005_skill::Skill, m20251101_000006_volunteer::Volunteer};

static PK_VOLUNTEER_SKILL: &str = "pk-volunteer_skill";
static FK_VOLUNTEER_SKILL_VOLUNTEER_ID: &str = "fk-volunteer_skill-volunteer_id";
static FK_VOLUNTEER_SKILL_SKILL_ID: &str = "fk-volunteer_skill-skill_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VolunteerSkill::Table)
                    .if_not_exists()
                    .col(integer(VolunteerSkill::VolunteerId))
                    .col(integer(VolunteerSkill::SkillId))
                    .primary_key(
                        Index::create()
                            .name(PK_VOLUNTEER_SKILL)
                            .col(VolunteerSkill::VolunteerId)
                            .col(VolunteerSkill::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VOLUNTEER_SKILL_VOLUNTEER_ID)
                            .from(VolunteerSkill::Table, VolunteerSkill::VolunteerId)
                            .to(Volunteer::Table, Volunteer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VOLUNTEER_SKILL_SKILL_ID)
                            .from(VolunteerSkill::Table, VolunteerSkill::SkillId)
                            .to(Skill::Table, Skill::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VolunteerSkill::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VolunteerSkill {
    Table,
    VolunteerId,
    SkillId,
}
