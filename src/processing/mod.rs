pub mod nearest;
pub mod region;
pub mod statistics;
pub mod time_format;
