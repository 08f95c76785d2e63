#![allow(non_snake_case)]

mod app;
mod capabilities;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Country override from the command line, read once at startup.
static COUNTRY_OVERRIDE: OnceLock<Option<String>> = OnceLock::new();

pub fn country_override() -> Option<String> {
    COUNTRY_OVERRIDE.get().cloned().flatten()
}

/// Fieldkit demo - every component composed into one signup form
#[derive(Parser, Debug)]
#[command(name = "fieldkit-demo")]
#[command(about = "Fieldkit component demo form")]
struct Args {
    /// Two-letter country code preselected in the phone input
    #[arg(short, long)]
    country: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    COUNTRY_OVERRIDE
        .set(args.country)
        .expect("country override set once");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Fieldkit demo")
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
