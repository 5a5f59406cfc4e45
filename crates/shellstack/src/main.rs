//! shellstack CLI - writes a synthetic sphere/cone/cylinder test stack.

use std::error::Error;

use shellstack::run;

mod cli;

use cli::Args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse_normalized();
    let config = args.resolve()?;

    if let Err(err) = config.validate() {
        log::warn!("{err}; generating anyway");
    }
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    let path = run(&config, &args.output_dir)?;
    log::debug!("stack written to {}", path.display());
    Ok(())
}
