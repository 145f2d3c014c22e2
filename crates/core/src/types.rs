/// Primary keys of the catalogue tables are PostgreSQL `INTEGER` (`SERIAL`).
pub type DbId = i32;
