//! User-facing feedback: toasts and confirmation prompts.

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Toast sink. The frontend forwards to its toast provider.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: String);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message.to_string());
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message.to_string());
    }

    fn info(&self, message: &str) {
        self.notify(ToastKind::Info, message.to_string());
    }
}

/// Text of a yes/no confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl ConfirmPrompt {
    /// Standard delete confirmation for one record.
    pub fn delete(label: &str, name: &str) -> Self {
        let message = if name.is_empty() {
            format!("This {} will be permanently deleted.", label.to_lowercase())
        } else {
            format!("\"{}\" will be permanently deleted.", name)
        };
        Self {
            title: format!("Delete {}?", label.to_lowercase()),
            message,
            confirm_text: "Yes, delete it".to_string(),
            cancel_text: "Cancel".to_string(),
        }
    }
}

#[async_trait(?Send)]
pub trait Confirm {
    /// `true` when the user accepted.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}
