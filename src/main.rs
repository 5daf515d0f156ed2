// SPDX-License-Identifier: MPL-2.0
use iced_keepsake::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        album_dir: args.opt_value_from_str("--album").unwrap_or(None),
        music_path: args.opt_value_from_str("--music").unwrap_or(None),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap_or(None),
    };

    app::run(flags)
}
