//! doubtdesk - keyword-matched explanations for student doubts
//!
//! A student picks a branch and subject, types a doubt, and gets a
//! structured HTML explanation chosen by keyword rules.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod selector;

pub use selector::explain;
