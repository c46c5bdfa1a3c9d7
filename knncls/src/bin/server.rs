use clap::Parser;
use knncls::{serve, DataSet, KnnResult, Listener, ACCEPT_DEADLINE, DEFAULT_POOL_SIZE};
use std::{
    fs::File,
    io::BufReader,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

/// k-NN classification server.
#[derive(Debug, Parser)]
#[command(name = "server")]
struct Args {
    /// Address to bind the listener to.
    bind_ip: IpAddr,
    /// Port to bind the listener to.
    bind_port: u16,
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

    let _logger = match flexi_logger::Logger::try_with_env_or_str("info")
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
    let training = Arc::new(DataSet::from_reader(BufReader::new(file))?);
    log::info!(
        "Loaded {} training points from {}",
        training.len(),
        args.classified.display()
    );

    let listener = Listener::bind(SocketAddr::new(args.bind_ip, args.bind_port))?;
    serve(&listener, &training, DEFAULT_POOL_SIZE, ACCEPT_DEADLINE)
}
