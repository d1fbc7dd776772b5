pub mod cursor;
pub mod series;
pub mod session;
