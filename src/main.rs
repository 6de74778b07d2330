// SPDX-License-Identifier: MPL-2.0
use icon_forge::app::{self, Flags};
use icon_forge::logging;

const HELP: &str = "\
IconForge - numbered badge icon designer

USAGE:
  icon_forge [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
  -v, --verbose           Log at debug level
  --data-dir <PATH>       Directory for presets and session state
                          (env: ICON_FORGE_DATA_DIR)
  --config-dir <PATH>     Directory holding settings.toml
                          (env: ICON_FORGE_CONFIG_DIR)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    logging::init(verbose);

    let flags = Flags {
        data_dir: optional_path(&mut args, "--data-dir"),
        config_dir: optional_path(&mut args, "--config-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn optional_path(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, error = %err, "invalid option value");
            None
        }
    }
}
