// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use iced_folio::config;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, config_warning) = config::load();

    app::run(Flags {
        config,
        config_warning,
    })
}
