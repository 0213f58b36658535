#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message shown in the toaster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Notices in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notices {
    next_id: u64,
    items: Vec<Notice>,
}

impl Notices {
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message.into())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message.into())
    }

    fn push(&mut self, kind: NoticeKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, kind, message });
        id
    }

    /// Unknown ids are ignored; a notice may already have been closed by hand.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_keep_increasing_after_dismissal() {
        let mut notices = Notices::default();
        let first = notices.success("saved");
        notices.dismiss(first);
        let second = notices.error("failed");

        assert!(second > first);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices.iter().next().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let mut notices = Notices::default();
        let id = notices.success("saved");
        notices.error("failed");

        notices.dismiss(id);
        notices.dismiss(id);

        let messages: Vec<_> = notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["failed"]);
    }
}
