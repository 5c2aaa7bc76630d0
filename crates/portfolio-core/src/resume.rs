//! Resume preview dialog.
//!
//! States: `Idle → Loading → {Loaded | Errored}`; closing always returns to
//! `Idle`. Each open hands out a [`TimerToken`] for the fallback timer. A token
//! from an earlier open, or one that fires after the viewer already answered,
//! is stale and changes nothing.

use std::time::Duration;

/// Fallback for viewers that never report success
pub const DEFAULT_PREVIEW_TIMEOUT: Duration = Duration::from_millis(8000);

/// Why the preview could not be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFailure {
    /// Embedded viewer reported a load error
    ViewerError,
    /// Viewer stayed silent past the fallback timeout
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(PreviewFailure),
}

impl PreviewState {
    pub fn is_errored(&self) -> bool {
        matches!(self, PreviewState::Errored(_))
    }
}

/// Handle for one armed fallback timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
    timeout: Duration,
}

impl TimerToken {
    /// How long the host should wait before reporting expiry
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Preview state machine for one dialog
#[derive(Debug, Clone)]
pub struct ResumePreview {
    state: PreviewState,
    generation: u64,
    timeout: Duration,
}

impl Default for ResumePreview {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_TIMEOUT)
    }
}

impl ResumePreview {
    pub fn new(timeout: Duration) -> Self {
        Self {
            state: PreviewState::Idle,
            generation: 0,
            timeout,
        }
    }

    /// A preview that is already loading, as when a dialog mounts open
    pub fn opened(timeout: Duration) -> Self {
        let mut preview = Self::new(timeout);
        preview.open();
        preview
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// The live fallback timer, if the preview is still loading
    pub fn pending_timer(&self) -> Option<TimerToken> {
        (self.state == PreviewState::Loading).then_some(TimerToken {
            generation: self.generation,
            timeout: self.timeout,
        })
    }

    pub fn is_open(&self) -> bool {
        self.state != PreviewState::Idle
    }

    /// Open the dialog and arm the fallback timer
    pub fn open(&mut self) -> TimerToken {
        self.generation += 1;
        self.state = PreviewState::Loading;
        tracing::debug!(generation = self.generation, "Resume preview loading");
        TimerToken {
            generation: self.generation,
            timeout: self.timeout,
        }
    }

    /// Viewer rendered the document
    pub fn on_rendered(&mut self) -> bool {
        if self.state != PreviewState::Loading {
            return false;
        }
        self.disarm();
        self.state = PreviewState::Loaded;
        true
    }

    /// Viewer failed to load the document
    pub fn on_viewer_error(&mut self) -> bool {
        if self.state != PreviewState::Loading {
            return false;
        }
        self.disarm();
        self.fail(PreviewFailure::ViewerError);
        true
    }

    /// Fallback timer fired. Returns whether the token was still live.
    pub fn on_timeout(&mut self, token: TimerToken) -> bool {
        if token.generation != self.generation || self.state != PreviewState::Loading {
            return false;
        }
        self.fail(PreviewFailure::TimedOut);
        true
    }

    /// Close the dialog, cancelling any armed timer
    pub fn close(&mut self) {
        self.disarm();
        self.state = PreviewState::Idle;
    }

    fn disarm(&mut self) {
        self.generation += 1;
    }

    fn fail(&mut self, reason: PreviewFailure) {
        tracing::warn!(?reason, "Resume preview unavailable");
        self.state = PreviewState::Errored(reason);
    }
}

/// A way out of a failed preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryAction {
    OpenInNewTab { url: String },
    Download { url: String, file_name: String },
}

impl RecoveryAction {
    pub fn label(&self) -> &'static str {
        match self {
            RecoveryAction::OpenInNewTab { .. } => "Open in New Tab",
            RecoveryAction::Download { .. } => "Download Resume",
        }
    }

    pub fn href(&self) -> &str {
        match self {
            RecoveryAction::OpenInNewTab { url } | RecoveryAction::Download { url, .. } => url,
        }
    }
}

/// The resume document and the URLs each way of viewing it uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAsset {
    /// Loaded by the embedded viewer and linked for download
    url: String,
    /// Handed to the host for viewing outside the dialog
    open_url: String,
    file_name: String,
}

impl ResumeAsset {
    /// Message shown instead of the preview when it fails
    pub const UNAVAILABLE_MESSAGE: &'static str = "Preview not available on this device";

    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let file_name = url
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("resume.pdf")
            .to_string();
        Self {
            open_url: url.clone(),
            url,
            file_name,
        }
    }

    /// Use a different location for "open in new tab"
    pub fn with_open_url(mut self, url: impl Into<String>) -> Self {
        self.open_url = url.into();
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn open_url(&self) -> &str {
        &self.open_url
    }

    /// URL for the embedded viewer, with viewer chrome hidden
    pub fn preview_url(&self) -> String {
        format!("{}#toolbar=0&navpanes=0", self.url)
    }

    /// Suggested file name for downloads
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn recovery_actions(&self) -> [RecoveryAction; 2] {
        [
            RecoveryAction::OpenInNewTab {
                url: self.open_url.clone(),
            },
            RecoveryAction::Download {
                url: self.url.clone(),
                file_name: self.file_name.clone(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_before_timeout_loads() {
        let mut preview = ResumePreview::default();
        let token = preview.open();
        assert_eq!(preview.state(), PreviewState::Loading);
        assert!(preview.on_rendered());
        assert_eq!(preview.state(), PreviewState::Loaded);
        // Timer was cancelled by the success
        assert!(!preview.on_timeout(token));
        assert_eq!(preview.state(), PreviewState::Loaded);
    }

    #[test]
    fn silence_past_timeout_errors() {
        let mut preview = ResumePreview::default();
        let token = preview.open();
        assert_eq!(token.timeout(), DEFAULT_PREVIEW_TIMEOUT);
        assert!(preview.on_timeout(token));
        assert_eq!(
            preview.state(),
            PreviewState::Errored(PreviewFailure::TimedOut)
        );
        // A late success does not override the fallback
        assert!(!preview.on_rendered());
    }

    #[test]
    fn viewer_error_errors_regardless_of_timer() {
        let mut preview = ResumePreview::default();
        let token = preview.open();
        assert!(preview.on_viewer_error());
        assert_eq!(
            preview.state(),
            PreviewState::Errored(PreviewFailure::ViewerError)
        );
        assert!(!preview.on_timeout(token));
        assert_eq!(
            preview.state(),
            PreviewState::Errored(PreviewFailure::ViewerError)
        );
    }

    #[test]
    fn reopen_resets_to_loading() {
        let mut preview = ResumePreview::default();
        let first = preview.open();
        preview.on_viewer_error();
        preview.close();
        assert_eq!(preview.state(), PreviewState::Idle);
        assert!(!preview.is_open());

        let second = preview.open();
        assert_eq!(preview.state(), PreviewState::Loading);
        // The first open's timer must not touch the second open
        assert!(!preview.on_timeout(first));
        assert_eq!(preview.state(), PreviewState::Loading);
        assert!(preview.on_timeout(second));
    }

    #[test]
    fn close_cancels_pending_timer() {
        let mut preview = ResumePreview::default();
        let token = preview.open();
        preview.close();
        assert!(!preview.on_timeout(token));
        assert_eq!(preview.state(), PreviewState::Idle);
    }

    #[test]
    fn recovery_actions_offer_open_and_download() {
        let asset = ResumeAsset::new("/resume.pdf");
        let actions = asset.recovery_actions();
        assert!(matches!(actions[0], RecoveryAction::OpenInNewTab { .. }));
        assert!(matches!(actions[1], RecoveryAction::Download { .. }));
        assert!(actions.iter().all(|a| a.href() == "/resume.pdf"));
        assert_eq!(asset.preview_url(), "/resume.pdf#toolbar=0&navpanes=0");
        assert_eq!(asset.file_name(), "resume.pdf");
    }

    #[test]
    fn open_action_uses_open_url() {
        let asset = ResumeAsset::new("/assets/resume-1a2b.pdf")
            .with_open_url("file:///tmp/portfolio/resume.pdf")
            .with_file_name("resume.pdf");
        let [open, download] = asset.recovery_actions();
        assert_eq!(open.href(), "file:///tmp/portfolio/resume.pdf");
        assert_eq!(download.href(), "/assets/resume-1a2b.pdf");
        assert_eq!(asset.preview_url(), "/assets/resume-1a2b.pdf#toolbar=0&navpanes=0");
        assert!(matches!(
            download,
            RecoveryAction::Download { ref file_name, .. } if file_name == "resume.pdf"
        ));
    }

    #[test]
    fn opened_preview_arms_its_timer() {
        let mut preview = ResumePreview::opened(DEFAULT_PREVIEW_TIMEOUT);
        assert_eq!(preview.state(), PreviewState::Loading);
        let token = preview.pending_timer().unwrap();
        assert!(preview.on_rendered());
        assert_eq!(preview.pending_timer(), None);
        assert!(!preview.on_timeout(token));
    }

    #[test]
    fn errored_is_reported() {
        let mut preview = ResumePreview::opened(DEFAULT_PREVIEW_TIMEOUT);
        assert!(!preview.state().is_errored());
        let token = preview.pending_timer().unwrap();
        assert!(preview.on_timeout(token));
        assert!(preview.state().is_errored());
    }

    #[test]
    fn file_name_falls_back_for_bare_paths() {
        assert_eq!(ResumeAsset::new("/docs/").file_name(), "resume.pdf");
        assert_eq!(ResumeAsset::new("/docs/cv-2026.pdf").file_name(), "cv-2026.pdf");
    }
}
