// src/main.rs

use shellrun::exec::{Shell, ShellRunner};
use shellrun::{cli, execute, load_config, logging};

fn main() {
    match run_main() {
        Ok(status) => std::process::exit(status),
        Err(err) => {
            eprintln!("shellrun error: {err:?}");
            std::process::exit(1);
        }
    }
}

fn run_main() -> anyhow::Result<i32> {
    let args = cli::parse();
    let config = load_config(args.config.as_deref())?;
    logging::init_logging(args.log_level, config.log().level)?;

    let runner = ShellRunner::new(Shell::from_config(config.shell()));
    execute(&args, runner.shell(), &runner, &mut std::io::stdout().lock())
}
