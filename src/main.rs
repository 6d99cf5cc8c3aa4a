// SPDX-License-Identifier: MPL-2.0
use manual_geolocation::app::{self, Flags};

const HELP: &str = "\
manual_geolocation - preview the manual geolocation field extension

USAGE:
  manual_geolocation [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --variant <VARIANT>    Form variant: combined or split
  --config-dir <PATH>    Directory holding settings.toml
  -h, --help             Print this help
";

fn main() -> iced::Result {
    pretty_env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match Flags::from_args(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
