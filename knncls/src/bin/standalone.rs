use clap::Parser;
use knncls::{DataSet, KnnError, KnnResult, LocalIoEndpoint, Session};
use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

/// The k-NN session machine bound directly to the terminal.
#[derive(Debug, Parser)]
#[command(name = "standalone")]
struct Args {
    /// Classified training CSV.
    classified: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            return ExitCode::FAILURE;
        }
    };

    let _logger = match flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(flexi_logger::Logger::start)
    {
        Ok(handle) => handle,
        Err(error) => {
            eprintln!("Logger initialization failed with {error}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("\x1b[31;1mError:\x1b[0m {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> KnnResult<()> {
    let file = File::open(&args.classified)?;
    let training = DataSet::from_reader(BufReader::new(file))?;
    log::info!("Loaded {} training points", training.len());

    let mut session = Session::new(LocalIoEndpoint::new(), &training);
    match session.run() {
        // end of stdin is a normal way to leave the standalone session
        Err(KnnError::PeerClosed) | Ok(()) => Ok(()),
        Err(error) => Err(error),
    }
}
