//! Opening links when a shortcut fires

/// Capability to open a URL
///
/// Implementations must not fail loudly; errors are logged.
pub trait LinkOpener {
    fn open_link(&mut self, link: &str);
}

/// Opens links in the system's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open_link(&mut self, link: &str) {
        match open::that(link) {
            Ok(()) => tracing::info!("Opened {}", link),
            Err(e) => tracing::warn!("Failed to open {}: {}", link, e),
        }
    }
}

/// Logs links instead of opening them
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOpener;

impl LinkOpener for LogOpener {
    fn open_link(&mut self, link: &str) {
        tracing::info!("Would open {}", link);
    }
}

/// Remembers every link it was asked to open
#[derive(Debug, Default, Clone)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open_link(&mut self, link: &str) {
        self.opened.push(link.to_string());
    }
}
