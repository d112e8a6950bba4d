// SPDX-License-Identifier: MPL-2.0
use kitty_viewer::app::{self, paths, Flags};
use kitty_viewer::error::Result;

const HELP: &str = "\
Fetch and display a random kitty.

USAGE:
  kitty_viewer [OPTIONS] [LOADING_IMAGE]

ARGS:
  LOADING_IMAGE            Placeholder image shown while the kitty loads
                           (defaults to [kitty] loading_image in settings.toml)

OPTIONS:
  --lang <id>              UI language, e.g. en-US or fr
  --endpoint <url>         Image-search endpoint
  --max-dimension <px>     Bound for the larger side of the picture
  --config-dir <dir>       Directory holding settings.toml
  -h, --help               Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        max_dimension: args.opt_value_from_str("--max-dimension")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        loading_image: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("kitty_viewer=info"),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let startup = parse_flags(args).and_then(|flags| {
        paths::init_cli_overrides(flags.config_dir.clone());
        app::prepare(flags)
    });

    match startup {
        Ok(startup) => app::run(startup),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
