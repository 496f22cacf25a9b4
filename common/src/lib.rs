//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有される型とプロジェクトフィルタエンジン

pub mod types;
pub mod taxonomy;
pub mod filter;
pub mod query;
pub mod session;
pub mod drag;
pub mod data;
pub mod error;

pub use types::{GridItem, NavItem, ProjectRecord, SocialLink, WorkExperience};
pub use taxonomy::{derive_fields, field_for_skill, stack_category};
pub use filter::{compute_visible, derive_visible_fields, derive_visible_skills, FilterState, TagSelection, ALL};
pub use query::{decode_query, encode_query, share_url, LISTING_PATH};
pub use session::{FilterSession, SyncPolicy, UrlEffect, DEFAULT_SUMMARY_LIMIT};
pub use drag::DragScroll;
pub use data::ProjectCatalog;
pub use error::{Error, Result};
