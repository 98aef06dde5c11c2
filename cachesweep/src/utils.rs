pub mod disk_util;
pub(crate) mod runtime;
