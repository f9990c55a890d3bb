pub mod aggregator;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod graphql;
pub mod logging;
pub mod server;
pub mod storage;
