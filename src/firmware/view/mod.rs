pub mod console;
pub mod table;
