pub mod runner;
pub mod storage;
