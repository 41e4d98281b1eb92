//! Dispatching a log level to a formatted line.
//!
//! [`checked`] covers every tag it declares, so the compiler holds it to that.
//! [`unchecked`] declares a third tag, has no arm for it, and falls through to
//! a catch-all that crashes when the tag shows up.

pub mod checked;
pub mod unchecked;
