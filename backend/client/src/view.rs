use dex::FavoriteEntry;

use crate::{lookup::LookupError, viewer::Card};

pub enum Screen<'a> {
    Welcome,
    Loading,
    Failed(&'a LookupError),
    Card(&'a Card),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short-lived message shown next to the main screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Presentation boundary. Implementations only draw what they are given and
/// cannot fail.
pub trait View {
    fn render(&mut self, screen: Screen<'_>);

    fn favorites(&mut self, favorites: &[FavoriteEntry]);

    fn notify(&mut self, notice: Notice);
}
