use sea_orm::entity::prelude::*;

/// Join record: `user_id` liked `freet_id`. Unique per pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    #[sea_orm(indexed)]
    pub freet_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::freets::Entity",
        from = "Column::FreetId",
        to = "super::freets::Column::Id",
        on_delete = "Cascade"
    )]
    Freet,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::freets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Freet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
