//! tvtext
//!
//! Full-screen text viewer for kiosk-style devices. Shows a file, a message or
//! the growing output of a script, scrolls with keyboard, mouse or game
//! controller, and reports whether the user pressed "Yes" or closed it.
//!
//! The library follows a Pure Core / Impure Shell split: [`viewer`] and
//! everything under it is pure per-frame logic, while [`app`] owns the
//! terminal and the event loop.

pub mod app;
pub mod config;
pub mod escape;
pub mod input;
pub mod layout;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;
pub mod viewer;

#[cfg(test)]
mod test_harness;
