//! `caravel-api` — HTTP adapter over the sale and HR modules.

pub mod app;
