//! Transient notification banner.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A notification with a headline and a message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Props for NoticeBanner component.
#[derive(Props, Clone, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Notice,
    /// Callback when the close button is clicked.
    pub on_dismiss: EventHandler<()>,
}

/// Banner for a success or error notice; never blocks input.
#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    let class = match props.notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    };

    rsx! {
        div { class: "{class}", role: "status",
            div {
                strong { "{props.notice.title}" }
                p { "{props.notice.message}" }
            }
            button {
                onclick: move |_| props.on_dismiss.call(()),
                "×"
            }
        }
    }
}
