
use knncls::{Frame, FrameKind, IoEndpoint, KnnError, KnnResult, Listener, RemoteIoEndpoint, Transport};
use std::{
    io::Write,
    net::{IpAddr, Ipv4Addr},
    time::Duration,
};

#[test]
fn test_020_frames() -> KnnResult<()> {
    let _log_handle = test_utils::init_logger();
    frames_round_trip()?;
    tag_values_are_stable()?;
    sequences_preserve_order()?;
    unknown_tag_is_rejected();
    remote_endpoint_dialogue()?;
    mismatched_reply_is_a_protocol_error()?;
    Ok(())
}

fn all_frames() -> Vec<Frame> {
    vec![
        Frame::Display("text\n".to_string()),
        Frame::Prompt,
        Frame::PromptReply("token".to_string()),
        Frame::OpenRead("in.csv".to_string()),
        Frame::ReadLine,
        Frame::ReadReply("1,2,A".to_string()),
        Frame::CloseRead,
        Frame::OpenWrite("out.txt".to_string()),
        Frame::WriteLine("1.\tA\n".to_string()),
        Frame::CloseWrite,
        Frame::Terminate,
    ]
}

fn frames_round_trip() -> KnnResult<()> {
    for frame in all_frames() {
        let mut buf = Vec::new();
        frame.sync_emit(&mut buf)?;
        assert_eq!(Frame::parse_sync(&mut buf.as_slice())?, frame);
    }
    Ok(())
}

fn tag_values_are_stable() -> KnnResult<()> {
    for (frame, tag) in all_frames().iter().zip(1_u8..) {
        let mut buf = Vec::new();
        frame.sync_emit(&mut buf)?;
        assert_eq!(buf[0], tag, "tag of {:?}", frame.kind());
        assert_eq!(FrameKind::from_u8(tag)?, frame.kind());
    }
    Ok(())
}

// No frame is lost, duplicated or reordered on one stream.
fn sequences_preserve_order() -> KnnResult<()> {
    let issued = all_frames();
    let mut buf = Vec::new();
    for frame in &issued {
        frame.sync_emit(&mut buf)?;
    }

    let mut rdr = buf.as_slice();
    let mut observed = Vec::new();
    while !rdr.is_empty() {
        observed.push(Frame::parse_sync(&mut rdr)?);
    }
    assert_eq!(observed, issued);
    Ok(())
}

fn unknown_tag_is_rejected() {
    let result = Frame::parse_sync(&mut [42_u8].as_slice());
    assert!(matches!(result, Err(KnnError::Protocol(_))));

    let result = Frame::parse_sync(&mut [0_u8].as_slice());
    assert!(matches!(result, Err(KnnError::Protocol(_))));
}

// Request/reply pairing and the EOF signal over a real socket.
fn remote_endpoint_dialogue() -> KnnResult<()> {
    let listener = Listener::bind((IpAddr::V4(Ipv4Addr::LOCALHOST), 0).into())?;
    let server_addr = listener.local_addr();

    let client = std::thread::spawn(move || -> KnnResult<Vec<FrameKind>> {
        let mut transport = Transport::connect(IpAddr::V4(Ipv4Addr::LOCALHOST), server_addr)?;
        let mut seen = Vec::new();
        loop {
            let frame = Frame::parse_sync(&mut transport)?;
            seen.push(frame.kind());
            match frame {
                Frame::Prompt => {
                    Frame::PromptReply("hello".to_string()).sync_emit(&mut transport)?;
                    transport.flush()?;
                }
                Frame::ReadLine => {
                    // EOF right away
                    Frame::ReadReply(String::new()).sync_emit(&mut transport)?;
                    transport.flush()?;
                }
                Frame::Terminate => return Ok(seen),
                _ => {}
            }
        }
    });

    let (transport, _peer) = listener.accept_with_deadline(Duration::from_secs(5))?;
    let mut endpoint = RemoteIoEndpoint::new(transport);
    endpoint.display("hi\n")?;
    assert_eq!(endpoint.prompt()?, "hello");
    endpoint.open_read("whatever.csv")?;
    assert_eq!(endpoint.read_line()?, None);
    endpoint.close_read()?;
    endpoint.terminate()?;

    let seen = client.join().expect("client thread panicked")?;
    assert_eq!(
        seen,
        vec![
            FrameKind::Display,
            FrameKind::Prompt,
            FrameKind::OpenRead,
            FrameKind::ReadLine,
            FrameKind::CloseRead,
            FrameKind::Terminate,
        ]
    );
    Ok(())
}

fn mismatched_reply_is_a_protocol_error() -> KnnResult<()> {
    let listener = Listener::bind((IpAddr::V4(Ipv4Addr::LOCALHOST), 0).into())?;
    let server_addr = listener.local_addr();

    let client = std::thread::spawn(move || -> KnnResult<()> {
        let mut transport = Transport::connect(IpAddr::V4(Ipv4Addr::LOCALHOST), server_addr)?;
        match Frame::parse_sync(&mut transport)? {
            Frame::Prompt => {
                // wrong reply kind on purpose
                Frame::ReadReply("x".to_string()).sync_emit(&mut transport)?;
                transport.flush()?;
            }
            other => panic!("expected Prompt, got {other:?}"),
        }
        Ok(())
    });

    let (transport, _peer) = listener.accept_with_deadline(Duration::from_secs(5))?;
    let mut endpoint = RemoteIoEndpoint::new(transport);
    let result = endpoint.prompt();
    assert!(matches!(result, Err(KnnError::Protocol(_))));
    client.join().expect("client thread panicked")?;
    Ok(())
}
