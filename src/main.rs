use quickest_route::{loader, report, ShortestPathSolver};

use std::{error::Error, path::PathBuf, process::ExitCode};
use clap::Parser;
use log::info;


/// Find the quickest route between two locations
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Route description: a `source,target` line followed by `from,to,minutes` lines
    #[clap(value_parser)]
    input: PathBuf,

    /// Where the report is written
    #[clap(short, long, value_parser, default_value = "test.out")]
    output: PathBuf,

    /// Also print the report to stdout
    #[clap(long)]
    print: bool,
}


fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let request = loader::load_file(&args.input)?;

    let route = ShortestPathSolver.solve(&request.graph, &request.source, &request.target)?;
    info!("{} -> {}: {}", request.source, request.target, route);

    report::write_report(&args.output, &route)?;
    if args.print {
        println!("{}", report::render(&route));
    }

    Ok(())
}
