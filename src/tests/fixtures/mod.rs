pub mod entries;
pub mod sessions;
pub mod weeks;
