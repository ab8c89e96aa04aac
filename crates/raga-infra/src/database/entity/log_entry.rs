//! Log entry entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use raga_core::domain::LogEntry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub level: String,
    pub target: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub logged_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            level: model.level,
            target: model.target,
            message: model.message,
            logged_at: model.logged_at.into(),
        }
    }
}

impl From<LogEntry> for ActiveModel {
    fn from(entry: LogEntry) -> Self {
        Self {
            id: Set(entry.id),
            level: Set(entry.level),
            target: Set(entry.target),
            message: Set(entry.message),
            logged_at: Set(entry.logged_at.into()),
        }
    }
}
