//! Reading-streak entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use raga_core::domain::Streak;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "streaks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub count: i32,
    pub last_read_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Streak {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            count: model.count.max(0) as u32,
            last_read_date: model.last_read_date,
        }
    }
}

impl From<Streak> for ActiveModel {
    fn from(streak: Streak) -> Self {
        Self {
            user_id: Set(streak.user_id),
            count: Set(streak.count as i32),
            last_read_date: Set(streak.last_read_date),
        }
    }
}
