//! Data Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Course tree as returned by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub item_id: String,
    pub title: String,
    #[serde(default)]
    pub modules: Vec<CatalogModule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogModule {
    pub item_id: String,
    pub title: String,
    pub course_id: String,
    #[serde(default)]
    pub lessons: Vec<CatalogLesson>,
    #[serde(default)]
    pub asks: Vec<CatalogAsk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogLesson {
    pub item_id: String,
    pub title: String,
    pub module_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogAsk {
    pub item_id: String,
    pub title: String,
    pub module_id: String,
    #[serde(default)]
    pub is_input: bool,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// Answer option of a quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub item_id: String,
    pub title: String,
    #[serde(default)]
    pub is_input: bool,
    #[serde(default)]
    pub is_true: bool,
}

/// Course detail (the catalog root, with its assets)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub item_id: String,
    pub title: String,
    #[serde(default)]
    pub image_main: Option<String>,
    #[serde(default)]
    pub image_menu: Option<String>,
    #[serde(default)]
    pub template_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub item_id: String,
    pub title: String,
    pub course_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonContent {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub item_id: String,
    pub title: String,
    pub module_id: String,
    #[serde(default)]
    pub content: LessonContent,
}

/// Quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ask {
    pub item_id: String,
    pub title: String,
    pub module_id: String,
    #[serde(default)]
    pub is_input: bool,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub item_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Upper-cased initials for the avatar, empty when no name is known
    pub fn initials(&self) -> String {
        let first = |name: &Option<String>| {
            name.as_deref()
                .and_then(|n| n.chars().next())
                .map(|c| c.to_string())
                .unwrap_or_default()
        };
        format!("{}{}", first(&self.first_name), first(&self.last_name)).to_uppercase()
    }

    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect();
        parts.join(" ")
    }
}

/// Entities whose title can be edited in place
pub trait Titled {
    fn item_id(&self) -> &str;
    fn title(&self) -> &str;
    fn set_title(&mut self, title: &str);
}

macro_rules! impl_titled {
    ($($ty:ty),*) => {
        $(impl Titled for $ty {
            fn item_id(&self) -> &str {
                &self.item_id
            }

            fn title(&self) -> &str {
                &self.title
            }

            fn set_title(&mut self, title: &str) {
                self.title = title.to_string();
            }
        })*
    };
}

impl_titled!(Course, Module, Lesson, Ask);

/// Login response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl LoginResponse {
    /// Only administrators may use the console
    pub fn is_admin(&self) -> bool {
        matches!(self.role.as_deref(), Some("admin") | Some("superadmin"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_deserializes_nested_tree() {
        let json = r#"[{
            "item_id": "c1",
            "title": "Math",
            "modules": [{
                "item_id": "m1",
                "title": "Intro",
                "course_id": "c1",
                "lessons": [{"item_id": "l1", "title": "Numbers", "module_id": "m1"}],
                "asks": [{
                    "item_id": "a1",
                    "title": "2+2?",
                    "module_id": "m1",
                    "answers": [{"item_id": "x1", "title": "4", "is_input": false, "is_true": true}]
                }]
            }]
        }]"#;

        let catalogs: Vec<Catalog> = serde_json::from_str(json).unwrap();
        assert_eq!(catalogs.len(), 1);
        let module = &catalogs[0].modules[0];
        assert_eq!(module.lessons[0].title, "Numbers");
        assert!(module.asks[0].answers[0].is_true);
        assert!(!module.asks[0].is_input);
    }

    #[test]
    fn test_missing_child_lists_default_to_empty() {
        let module: CatalogModule =
            serde_json::from_str(r#"{"item_id":"m1","title":"Intro","course_id":"c1"}"#).unwrap();
        assert!(module.lessons.is_empty());
        assert!(module.asks.is_empty());
    }

    #[test]
    fn test_user_initials() {
        let user = User {
            item_id: "u1".into(),
            first_name: Some("ivan".into()),
            last_name: Some("petrov".into()),
            email: None,
            role: None,
        };
        assert_eq!(user.initials(), "IP");
        assert_eq!(user.display_name(), "ivan petrov");

        let anonymous = User { first_name: None, last_name: None, ..user };
        assert_eq!(anonymous.initials(), "");
    }

    #[test]
    fn test_login_role_check() {
        let mut login = LoginResponse {
            access_token: "a".into(),
            refresh_token: "r".into(),
            user_id: "u".into(),
            role: Some("superadmin".into()),
        };
        assert!(login.is_admin());
        login.role = Some("student".into());
        assert!(!login.is_admin());
        login.role = None;
        assert!(!login.is_admin());
    }
}
