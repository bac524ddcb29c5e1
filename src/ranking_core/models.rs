//! Record types for the three blogging datasets

use serde::{Deserialize, Serialize};

/// The three logical datasets the pipeline consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Posts,
    Comments,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Posts => "posts",
            Resource::Comments => "comments",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "users" => Some(Resource::Users),
            "posts" => Some(Resource::Posts),
            "comments" => Some(Resource::Comments),
            _ => None,
        }
    }

    pub fn all() -> [Resource; 3] {
        [Resource::Users, Resource::Posts, Resource::Comments]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// A comment anchors to its post; the comment id itself is never joined on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_with_extra_fields() {
        let payload = r#"{"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz","address":{"street":"Kulas Light","city":"Gwenborough"},"phone":"1-770-736-8031 x56442","website":"hildegard.org"}"#;

        let user: User = serde_json::from_str(payload).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
    }

    #[test]
    fn test_parse_post_with_extra_fields() {
        let payload = r#"{"userId":1,"id":7,"title":"magnam facilis autem","body":"dolore placeat quibusdam ea quo vitae"}"#;

        let post: Post = serde_json::from_str(payload).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.user_id, 1);
    }

    #[test]
    fn test_parse_comment_with_extra_fields() {
        let payload = r#"{"postId":7,"id":34,"name":"odio adipisci rerum","email":"Nikita@garfield.biz","body":"quia molestiae reprehenderit quasi aspernatur"}"#;

        let comment: Comment = serde_json::from_str(payload).unwrap();
        assert_eq!(comment.id, 34);
        assert_eq!(comment.post_id, 7);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let payload = r#"{"id":1,"username":"Bret"}"#;
        assert!(serde_json::from_str::<User>(payload).is_err());
    }

    #[test]
    fn test_resource_round_trip() {
        for resource in Resource::all() {
            assert_eq!(Resource::from_str(resource.as_str()), Some(resource));
        }
        assert_eq!(Resource::from_str("albums"), None);
    }
}
