//! Platform glue shared by every component: timers, task spawning and window metrics.

pub mod platform;
pub mod timing;
pub mod viewport;
