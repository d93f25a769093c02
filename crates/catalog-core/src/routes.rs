//! Entity Routes
//!
//! Path-per-entity convention shared by links, breadcrumbs and the
//! slug lookup performed before a page renders.

pub const HOME_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";

/// Entity kinds the slug lookup can resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Course,
    Module,
    Lesson,
    Ask,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Course => "course",
            EntityKind::Module => "module",
            EntityKind::Lesson => "lesson",
            EntityKind::Ask => "ask",
        }
    }

    /// Route prefix, without the trailing slug
    pub fn path_prefix(&self) -> &'static str {
        match self {
            EntityKind::Course => "/course/",
            EntityKind::Module => "/course/module/",
            EntityKind::Lesson => "/course/module/lesson/",
            EntityKind::Ask => "/course/module/ask/",
        }
    }
}

/// Page address of one entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRoute {
    Course(String),
    Module(String),
    Lesson(String),
    Ask(String),
}

impl EntityRoute {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRoute::Course(_) => EntityKind::Course,
            EntityRoute::Module(_) => EntityKind::Module,
            EntityRoute::Lesson(_) => EntityKind::Lesson,
            EntityRoute::Ask(_) => EntityKind::Ask,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            EntityRoute::Course(s) | EntityRoute::Module(s) | EntityRoute::Lesson(s) | EntityRoute::Ask(s) => s,
        }
    }

    pub fn path(&self) -> String {
        format!("{}{}", self.kind().path_prefix(), self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(EntityRoute::Course("c1".into()).path(), "/course/c1");
        assert_eq!(EntityRoute::Module("m1".into()).path(), "/course/module/m1");
        assert_eq!(EntityRoute::Lesson("l1".into()).path(), "/course/module/lesson/l1");
        assert_eq!(EntityRoute::Ask("a1".into()).path(), "/course/module/ask/a1");
    }
}
