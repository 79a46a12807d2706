pub mod config;
pub mod graph;
pub mod runtime;
pub mod scan;
pub mod storage;
pub mod types;
pub mod view;
