// src/notify/mod.rs
use console::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification sink. The stores report the outcome of every
/// user-visible operation through this; nothing waits on an acknowledgement.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: ToastKind, title: &str, description: Option<&str>);
}

/// Renders toasts inline in the terminal, the closest analogue to the
/// popup toasts of the original interface.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: ToastKind, title: &str, description: Option<&str>) {
        let tag = match kind {
            ToastKind::Success => style("✅").green(),
            ToastKind::Error => style("❌").red(),
        };
        match description {
            Some(desc) => println!("{} {} ({})", tag, style(title).bold(), style(desc).dim()),
            None => println!("{} {}", tag, style(title).bold()),
        }
    }
}

#[cfg(test)]
pub(crate) use testing::RecordingNotifier;
