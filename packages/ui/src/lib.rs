//! This crate contains all shared UI for the job portal.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod badge;
pub use badge::{ApplicationBadge, EmploymentBadge, PostingBadge};

mod header;
pub use header::Header;

mod job_card;
pub use job_card::JobCard;

mod links;
pub use links::{apply_path, encode_query_value};

mod notice;
pub use notice::{Notice, NoticeBanner, NoticeKind};

mod timer;

pub mod pages;
