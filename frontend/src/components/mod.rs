pub mod achievements;
pub mod nav;
