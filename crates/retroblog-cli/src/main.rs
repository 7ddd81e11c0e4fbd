use clap::Parser;
use retroblog_cli::{CliArgs, RetroblogCli};

fn main() {
    let args = CliArgs::parse();
    let result = RetroblogCli::from_args("retroblog", &args).and_then(|cli| cli.run(args));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
