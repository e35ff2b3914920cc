//! Read entities definitions.

pub mod work_log;

pub use self::work_log::Journal;
