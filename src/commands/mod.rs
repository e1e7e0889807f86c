//! CLI commands for kitrubric

pub mod check;
pub mod dispatch;
pub mod input;
pub mod normalize;
pub mod score;
