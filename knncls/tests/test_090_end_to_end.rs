
use knncls::{serve, DataSet, KnnResult, Listener};
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
    time::{Duration, Instant},
};

const SHARED_CSV: &str = "0,0,A\n10,0,B\n0,10,B\n";
const CORNERS_CSV: &str = "0,0,A\n1,0,A\n0,1,B\n1,1,B\n2,2,B\n";

#[test]
fn test_090_end_to_end() -> KnnResult<()> {
    let _log_handle = test_utils::init_logger();
    full_session_over_loopback()?;
    concurrent_sessions_are_isolated()?;
    accept_timeout_shuts_down_cleanly()?;
    Ok(())
}

fn start_server(
    pool_size: usize,
    deadline: Duration,
) -> KnnResult<(SocketAddr, std::thread::JoinHandle<KnnResult<()>>)> {
    let listener = Listener::bind((IpAddr::V4(Ipv4Addr::LOCALHOST), 0).into())?;
    let server_addr = listener.local_addr();
    let training = Arc::new(DataSet::from_reader(SHARED_CSV.as_bytes())?);

    let handle = std::thread::spawn(move || serve(&listener, &training, pool_size, deadline));
    Ok((server_addr, handle))
}

fn full_session_over_loopback() -> KnnResult<()> {
    let (server_addr, server) = start_server(2, Duration::from_millis(600))?;

    let outcome = test_utils::run_wire_client(
        server_addr,
        &[
            "1", "train.csv", "t.csv", // upload
            "2", "1", "EUC", // k = 1
            "3", // classify
            "4", // display results
            "6", // confusion matrix
            "5", "results.txt", // download
            "7", // exit
        ],
        &[("train.csv", SHARED_CSV), ("t.csv", "1,1,A\n")],
    )?;

    assert!(outcome.displayed.contains("1.\tupload an unclassified csv file\n"));
    assert!(outcome.displayed.contains("1.\tA\n"));
    assert!(outcome.displayed.contains("Done.\n"));
    assert!(outcome.displayed.contains("A\t|\t100%\t|\n"));
    assert!(outcome.displayed.contains("\t\t| A |\n"));
    assert_eq!(
        outcome.written.get("results.txt").map(String::as_str),
        Some("1.\tA\n")
    );

    // once the acceptor times out the pool drains and the server returns
    server.join().expect("server thread panicked")?;
    Ok(())
}

fn concurrent_sessions_are_isolated() -> KnnResult<()> {
    let (server_addr, server) = start_server(2, Duration::from_millis(800))?;

    let first = std::thread::spawn(move || {
        test_utils::run_wire_client(
            server_addr,
            &["1", "train.csv", "t.csv", "2", "1", "EUC", "3", "4", "7"],
            &[("train.csv", SHARED_CSV), ("t.csv", "1,1,A\n")],
        )
    });
    let second = std::thread::spawn(move || {
        test_utils::run_wire_client(
            server_addr,
            &["1", "train.csv", "t.csv", "3", "4", "7"],
            &[("train.csv", CORNERS_CSV), ("t.csv", "0.5,0.5,A\n")],
        )
    });

    let first = first.join().expect("first client panicked")?;
    let second = second.join().expect("second client panicked")?;

    // k = 1 on the spread-out set: the nearest neighbor is the A corner
    assert!(first.displayed.contains("1.\tA\n"));
    // default k = 5 on the corner set: three of five neighbors are B
    assert!(second.displayed.contains("1.\tB\n"));

    server.join().expect("server thread panicked")?;
    Ok(())
}

fn accept_timeout_shuts_down_cleanly() -> KnnResult<()> {
    let start = Instant::now();
    let (_server_addr, server) = start_server(2, Duration::from_millis(200))?;
    server.join().expect("server thread panicked")?;
    assert!(start.elapsed() < Duration::from_secs(5));
    Ok(())
}
