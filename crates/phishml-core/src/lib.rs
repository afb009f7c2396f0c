pub mod config;
pub mod features;
pub mod logging;
pub mod model;
pub mod paths;
pub mod scan_log;
pub mod scoring;
pub mod service;
pub mod training;
pub mod verdict;
