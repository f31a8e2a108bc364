use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::likes;

/// Wire form of a like. Identifiers are strings; `created_at` is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub id: String,
    pub user_id: String,
    pub freet_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct LikeList {
    #[schema(value_type = Vec<LikeResponse>)]
    pub items: Vec<LikeResponse>,
}

pub fn to_like_response(like: &likes::Model) -> LikeResponse {
    LikeResponse {
        id: like.id.to_string(),
        user_id: like.user_id.to_string(),
        freet_id: like.freet_id.to_string(),
    }
}

impl From<&likes::Model> for LikeResponse {
    fn from(like: &likes::Model) -> Self {
        to_like_response(like)
    }
}

impl FromIterator<LikeResponse> for LikeList {
    fn from_iter<I: IntoIterator<Item = LikeResponse>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn like() -> likes::Model {
        likes::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            freet_id: Uuid::new_v4(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn stringifies_identifiers() {
        let like = like();
        let resp = to_like_response(&like);

        assert_eq!(resp.id, like.id.to_string());
        assert_eq!(resp.user_id, like.user_id.to_string());
        assert_eq!(resp.freet_id, like.freet_id.to_string());
    }

    #[test]
    fn formatting_is_idempotent() {
        let like = like();
        assert_eq!(to_like_response(&like), LikeResponse::from(&like));
        assert_eq!(to_like_response(&like), to_like_response(&like));
    }

    #[test]
    fn serializes_camel_case_without_bookkeeping() {
        let like = like();
        let json = serde_json::to_value(to_like_response(&like)).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["id"], like.id.to_string());
        assert_eq!(obj["userId"], like.user_id.to_string());
        assert_eq!(obj["freetId"], like.freet_id.to_string());
        assert!(!obj.contains_key("created_at"));
    }

    #[test]
    fn list_serializes_as_bare_array() {
        let list: LikeList = [like(), like()].iter().map(to_like_response).collect();
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
    }
}
