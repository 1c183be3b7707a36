//! Blog database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Blog, BlogId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Blog {
    fn from(model: Model) -> Self {
        Blog {
            id: BlogId::Generated(model.id),
            title: model.title,
            content: model.content,
            author: model.author,
            date: model.date,
        }
    }
}
