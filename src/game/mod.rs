//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:40 Sunday
//! brief: quiz rules, independent of any window

mod catalog;
mod clock;
mod geometry;
mod input;
mod phase;
mod question;
mod session;

pub use catalog::{Catalog, Rgb, ServiceEntry, default_entries};
pub use clock::{Clock, ManualClock, RoundClock, SystemClock};
pub use geometry::{Point, Rect};
pub use input::{ButtonSpec, HitRegions, OPTION_COUNT, Pulse, ScreenLayout, resolve_click};
pub use phase::{Action, Feedback, Phase};
pub use question::{MAX_DISTRACTORS, Question};
pub use session::GameSession;
