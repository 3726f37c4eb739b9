use clap::Parser;

use tally::{evaluate, evaluate_file};

/// tally evaluates programs of arithmetic statements: expressions built from
/// numbers, `+ - * /`, unary minus and parentheses, each terminated by a
/// semicolon.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to look at a file instead of an inline program.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let result = if args.file {
        evaluate_file(&args.contents, true)
    } else {
        evaluate(&args.contents, true)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
