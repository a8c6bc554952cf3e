// jawm: Just Another Word Mangler.
//
// Reads a base wordlist and prints (or saves) every password candidate
// produced by the enabled mangling stages.
//
// Usage:
//   jawm -w WORDLIST [OPTIONS]
//
// Options:
//   -v, --verbose               Print progress messages
//   -u, --uppercase             Also include a capitalized variant
//   -U, --forceuppercase        Only keep the capitalized variant
//   -n, --numbers N             Append every N-digit number
//   -s, --special [N]           Append special characters N times (default 1)
//   -l, --minlength N           Drop candidates shorter than N
//   -o, --output PATH           Save to a new file instead of printing
//       --sort                  Print candidates in sorted order
//   -h, --help                  Print help
//
// Set RUST_LOG=debug to see the candidate count after every stage.

use std::io::{self, BufWriter};

use jawm_cli::{CliError, Invocation};
use jawm_mangle::{Mangler, VerboseLogger};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = match jawm_cli::parse_args(std::env::args_os()) {
        Ok(Invocation::Help) => {
            print!("{}", jawm_cli::usage());
            return;
        }
        Ok(Invocation::Run(config)) => config,
        Err(err) => usage_error(&err),
    };

    let logger = VerboseLogger::new(config.verbose);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(err) = Mangler::new(config).run(&logger, &mut out) {
        jawm_cli::fatal(&err.to_string());
    }
}

/// Report a configuration error, with the usage text when it helps.
fn usage_error(err: &CliError) -> ! {
    if err.shows_usage() {
        print!("{}", jawm_cli::usage());
    }
    jawm_cli::fatal(&err.to_string());
}
