pub mod action;
pub mod app;
pub mod command;
pub mod config;
pub mod countdown;
pub mod event;
pub mod format;
pub mod system;
pub mod trace;
pub mod ui;
