#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod decimal;
pub mod event;
pub mod serial;
pub mod startup;
pub mod vectors;
