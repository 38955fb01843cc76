//! User-visible notices for the startup surface.

use thiserror::Error;

/// Shown once the credential check passes.
pub const SUCCESS_TEXT: &str = "System configured and ready";

/// Static next-step hint; the PDF upload pipeline is the next planned
/// milestone.
pub const NEXT_STEP_TEXT: &str = "Project initialized. Next step: PDF upload";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

#[derive(Debug, Error)]
#[error("notice content must not be empty")]
pub struct EmptyNoticeError;

/// A complete user-visible notice.
///
/// Content is validated non-empty at construction, so the rendering
/// code never has to special-case blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    content: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, content: impl Into<String>) -> Result<Self, EmptyNoticeError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(EmptyNoticeError)
        } else {
            Ok(Self { kind, content })
        }
    }

    pub fn error(content: impl Into<String>) -> Result<Self, EmptyNoticeError> {
        Self::new(NoticeKind::Error, content)
    }

    pub fn success(content: impl Into<String>) -> Result<Self, EmptyNoticeError> {
        Self::new(NoticeKind::Success, content)
    }

    pub fn info(content: impl Into<String>) -> Result<Self, EmptyNoticeError> {
        Self::new(NoticeKind::Info, content)
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Notices rendered on the READY screen, in display order.
pub fn startup_notices() -> Vec<Notice> {
    vec![
        Notice {
            kind: NoticeKind::Success,
            content: SUCCESS_TEXT.to_string(),
        },
        Notice {
            kind: NoticeKind::Info,
            content: NEXT_STEP_TEXT.to_string(),
        },
    ]
}
