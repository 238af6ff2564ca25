pub mod catalog;
pub mod checklist;
pub mod cli;
pub mod commands;
pub mod config;
pub mod donation_tracker;
pub mod models;
pub mod render;
pub mod storage;
pub mod visibility;
