use std::sync::Mutex;

/// User-facing, blocking notifications (the page's `alert`)
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Keeps every alert so callers can inspect them afterwards
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
    echo: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records and also prints to stderr
    pub fn echoing() -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
            echo: true,
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .map(|alerts| alerts.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.alerts.lock().map(|alerts| alerts.len()).unwrap_or(0)
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        if self.echo {
            StderrNotifier.alert(message);
        }
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_string());
        }
    }
}
