use clap::Parser;
use knncls::{client, KnnResult, Transport};
use std::{
    net::{IpAddr, SocketAddr},
    process::ExitCode,
};

/// Interactive client of the k-NN classification server.
#[derive(Debug, Parser)]
#[command(name = "client")]
struct Args {
    /// Local address to bind the socket to.
    bind_ip: IpAddr,
    /// Address of the server.
    server_ip: IpAddr,
    /// Port of the server.
    server_port: u16,
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
    let server = SocketAddr::new(args.server_ip, args.server_port);
    let mut transport = Transport::connect(args.bind_ip, server)?;
    log::debug!("Connected to {}", transport.peer_addr());
    client::serve(&mut transport)
}
