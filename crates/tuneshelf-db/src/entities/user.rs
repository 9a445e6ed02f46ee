use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_premium: bool,
    pub country_id: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id",
        on_delete = "SetNull"
    )]
    Country,
    #[sea_orm(has_many = "super::playlist::Entity")]
    Playlist,
    #[sea_orm(has_many = "super::billing_history::Entity")]
    BillingHistory,
    #[sea_orm(has_many = "super::listening_history::Entity")]
    ListeningHistory,
    #[sea_orm(has_many = "super::song_like::Entity")]
    SongLike,
    #[sea_orm(has_many = "super::follow::Entity")]
    Follow,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::playlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playlist.def()
    }
}

impl Related<super::billing_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillingHistory.def()
    }
}

impl Related<super::listening_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListeningHistory.def()
    }
}

/// Songs this user liked, through `song_likes`.
impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        super::song_like::Relation::Song.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::song_like::Relation::User.def().rev())
    }
}

/// Artists this user follows, through `follows`.
impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::follow::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::follow::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Model {
        Model {
            id: 1,
            username: "budi_s".to_string(),
            email: "budi@example.com".to_string(),
            password: "pwd".to_string(),
            is_premium: true,
            country_id: Some(1),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_password_is_not_serialized() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "budi_s");
        assert_eq!(json["is_premium"], true);
    }

    #[test]
    fn test_country_is_optional() {
        let mut user = sample();
        user.country_id = None;
        let json = serde_json::to_value(user).unwrap();
        assert!(json["country_id"].is_null());
    }
}
