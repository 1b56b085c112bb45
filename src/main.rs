#![allow(warnings)]
//! Idea & Feature Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod edit;
mod logger;
mod models;
mod pagination;
mod state;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
