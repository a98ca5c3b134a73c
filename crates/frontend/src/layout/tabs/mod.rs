//! Tab management module.
//!
//! - `page` - TabPage wrapper around one tab's content
//! - `registry` - tab.key → page view mapping (single source of truth)
//! - `strip` - clickable tab headers

pub mod page;
pub mod registry;
pub mod strip;

pub use page::TabPage;
pub use strip::TabStrip;
