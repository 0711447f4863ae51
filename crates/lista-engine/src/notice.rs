use serde::Serialize;
use std::time::{Duration, Instant};

/// How long a notice stays visible before it self-dismisses.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient feedback banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Notices posted in quick succession stack in order; each one expires
/// independently after `NOTICE_TTL`. No de-duplication, no queueing.
#[derive(Debug, Default)]
pub struct NoticeStack {
    entries: Vec<(Instant, Notice)>,
}

impl NoticeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        self.entries.push((now, notice));
    }

    /// Notices still within their display window, oldest first. Expired
    /// entries are pruned as a side effect.
    pub fn active(&mut self, now: Instant) -> Vec<Notice> {
        self.entries
            .retain(|(posted, _)| now.duration_since(*posted) < NOTICE_TTL);
        self.entries
            .iter()
            .map(|(_, notice)| notice.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_stack_in_order() {
        let mut stack = NoticeStack::new();
        let now = Instant::now();
        stack.push(Notice::success("one"), now);
        stack.push(Notice::error("two"), now);

        let active = stack.active(now);
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].message, "one");
        assert_eq!(active[1].message, "two");
    }

    #[test]
    fn duplicate_notices_are_not_merged() {
        let mut stack = NoticeStack::new();
        let now = Instant::now();
        stack.push(Notice::success("same"), now);
        stack.push(Notice::success("same"), now);
        assert_eq!(stack.active(now).len(), 2);
    }

    #[test]
    fn notices_expire_after_the_ttl() {
        let mut stack = NoticeStack::new();
        let now = Instant::now();
        stack.push(Notice::success("old"), now);

        let later = now + NOTICE_TTL;
        assert!(stack.active(later).is_empty());

        let just_before = now + NOTICE_TTL - Duration::from_millis(1);
        stack.push(Notice::success("fresh"), just_before);
        assert_eq!(stack.active(just_before).len(), 1);
    }
}
