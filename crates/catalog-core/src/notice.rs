//! Notices
//!
//! Dismissible status messages. A loading notice keeps its id and is
//! replaced in place by the outcome of the action that raised it.

/// Auto-dismiss delay for outcome notices
pub const NOTICE_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Loading,
    Success,
    Failure,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Loading => "notice loading",
            NoticeLevel::Success => "notice success",
            NoticeLevel::Failure => "notice failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    next: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    fn push(&mut self, level: NoticeLevel, message: String) -> NoticeId {
        self.next += 1;
        let id = NoticeId(self.next);
        self.notices.push(Notice { id, level, message });
        id
    }

    pub fn loading(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Loading, message.into())
    }

    /// Resolve `id` as success; raises a fresh notice if it was dismissed
    pub fn succeed(&mut self, id: NoticeId, message: impl Into<String>) -> NoticeId {
        self.resolve(id, NoticeLevel::Success, message.into())
    }

    pub fn fail(&mut self, id: NoticeId, message: impl Into<String>) -> NoticeId {
        self.resolve(id, NoticeLevel::Failure, message.into())
    }

    /// Outcome notice with no preceding loading state
    pub fn error(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Failure, message.into())
    }

    fn resolve(&mut self, id: NoticeId, level: NoticeLevel, message: String) -> NoticeId {
        match self.notices.iter_mut().find(|n| n.id == id) {
            Some(notice) => {
                notice.level = level;
                notice.message = message;
                id
            }
            None => self.push(level, message),
        }
    }

    pub fn dismiss(&mut self, id: NoticeId) {
        self.notices.retain(|n| n.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_is_replaced_in_place() {
        let mut board = NoticeBoard::new();
        let id = board.loading("Renaming module...");
        let resolved = board.succeed(id, "Module renamed");

        assert_eq!(resolved, id);
        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.notices()[0].level, NoticeLevel::Success);
        assert_eq!(board.notices()[0].message, "Module renamed");
    }

    #[test]
    fn test_resolving_dismissed_notice_raises_new_one() {
        let mut board = NoticeBoard::new();
        let id = board.loading("Uploading...");
        board.dismiss(id);
        let fresh = board.fail(id, "Upload failed");

        assert_ne!(fresh, id);
        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.notices()[0].level, NoticeLevel::Failure);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut board = NoticeBoard::new();
        let a = board.loading("a");
        let b = board.error("b");
        assert_ne!(a, b);
        board.dismiss(a);
        board.dismiss(b);
        assert!(board.notices().is_empty());
    }
}
