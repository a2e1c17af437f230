//! `mdx`: demo window for modal-dioxus.

use anyhow::Result;
use modal_dioxus::{args, logging, ModalConfig};

fn main() -> Result<()> {
    let startup = args::parse_args();

    let config = match &startup.config {
        Some(path) => ModalConfig::load_from(path)?,
        None => ModalConfig::load_default()?,
    };

    // Initialize logging before Dioxus installs its own subscriber
    logging::init(&config.logging);

    log::info!("Starting mdx");

    modal_dioxus::launch(&config, startup.show)
}
