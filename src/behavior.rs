//! DOM-free state machines behind the page's interactive pieces.
//!
//! The browser bindings in `app` feed events in and apply the results; everything
//! here runs (and is tested) natively.

pub mod contact;
pub mod motion;
pub mod notify;
pub mod overlay;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod theme;

pub use motion::MotionPreference;
