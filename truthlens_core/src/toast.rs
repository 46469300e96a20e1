//! Notification queue behind the toaster surface.

/// Identifier handed out by [`ToastQueue::push`].
pub type ToastId = u64;

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    /// Neutral information
    #[default]
    Default,
    /// Something went wrong
    Destructive,
}

impl ToastVariant {
    /// CSS modifier class.
    pub fn class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Assigned on push; zero until then.
    pub id: ToastId,
    /// Bold first line.
    pub title: String,
    /// Optional body text.
    pub description: Option<String>,
    /// Visual flavour.
    pub variant: ToastVariant,
}

impl Toast {
    /// Neutral toast with a title only.
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    /// Destructive toast with a title only.
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::info(title)
        }
    }

    /// Attach body text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Bounded, newest-first list of visible toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    limit: usize,
    next_id: ToastId,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Queue keeping at most `limit` toasts (minimum one).
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            next_id: 1,
            toasts: Vec::new(),
        }
    }

    /// Show a toast, evicting the oldest ones beyond the limit.
    pub fn push(&mut self, mut toast: Toast) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        toast.id = id;
        self.toasts.insert(0, toast);
        self.toasts.truncate(self.limit);
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Visible toasts, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of visible toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn newest_toast_wins_at_limit_one() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Toast::info("Saved"));
        let second = queue.push(Toast::error("Host unavailable"));

        assert_eq!(queue.len(), 1);
        assert!(!queue.dismiss(first));
        assert_eq!(queue.iter().next().map(|t| t.id), Some(second));
    }

    #[test]
    fn keeps_newest_first() {
        let mut queue = ToastQueue::new(3);
        queue.push(Toast::info("one"));
        queue.push(Toast::info("two").with_description("body"));
        let titles: Vec<&str> = queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "one"]);
    }

    #[test]
    fn dismiss_removes_once() {
        let mut queue = ToastQueue::new(2);
        let id = queue.push(Toast::info("bye"));
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn zero_limit_is_clamped() {
        let mut queue = ToastQueue::new(0);
        queue.push(Toast::info("still shown"));
        assert_eq!(queue.len(), 1);
    }
}
