//! Client-side behavior for the contact landing page: navigation styling on
//! scroll, the mobile menu, reveal-on-scroll animation and the contact form.

pub mod behaviors;
pub mod config;
pub mod page;
pub mod scheduler;
pub mod validation;

pub use behaviors::Behaviors;
pub use config::BehaviorConfig;
pub use page::{Page, PageError};
pub use scheduler::Scheduler;
