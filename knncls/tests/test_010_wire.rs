
use knncls::{wire, DataPoint, KnnError, KnnResult};

#[test]
fn test_010_wire() -> KnnResult<()> {
    let _log_handle = test_utils::init_logger();
    primitives_round_trip()?;
    doubles_round_trip_bit_for_bit()?;
    strings_round_trip()?;
    blobs_round_trip()?;
    vectors_round_trip()?;
    data_points_round_trip()?;
    layout_is_little_endian()?;
    truncated_input_is_peer_closed();
    Ok(())
}

fn primitives_round_trip() -> KnnResult<()> {
    for value in [0_u8, 1, 127, 255] {
        let mut buf = Vec::new();
        wire::emit_u8(value, &mut buf)?;
        assert_eq!(wire::parse_u8(&mut buf.as_slice())?, value);
    }
    for value in [0_u32, 1, u32::MAX, u32::MAX - 1] {
        let mut buf = Vec::new();
        wire::emit_u32(value, &mut buf)?;
        assert_eq!(buf.len(), 4);
        assert_eq!(wire::parse_u32(&mut buf.as_slice())?, value);
    }
    for value in [0_u64, 1, u64::from(u32::MAX) + 1, u64::MAX] {
        let mut buf = Vec::new();
        wire::emit_u64(value, &mut buf)?;
        assert_eq!(buf.len(), 8);
        assert_eq!(wire::parse_u64(&mut buf.as_slice())?, value);
    }
    Ok(())
}

fn doubles_round_trip_bit_for_bit() -> KnnResult<()> {
    let values = [
        0.0,
        -0.0,
        1.5,
        -123.456,
        f64::MIN,
        f64::MAX,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ];
    for value in values {
        let mut buf = Vec::new();
        wire::emit_f64(value, &mut buf)?;
        let read_back = wire::parse_f64(&mut buf.as_slice())?;
        // NaN compares by bit pattern
        assert_eq!(read_back.to_bits(), value.to_bits());
    }
    Ok(())
}

fn strings_round_trip() -> KnnResult<()> {
    for value in ["", "a", "hello world", "naïve π", "line\nwith\nbreaks"] {
        let mut buf = Vec::new();
        wire::emit_string(value, &mut buf)?;
        assert_eq!(wire::parse_string(&mut buf.as_slice())?, value);
    }
    Ok(())
}

fn blobs_round_trip() -> KnnResult<()> {
    for value in [vec![], vec![0_u8], vec![255_u8; 1000], (0..=255_u8).collect()] {
        let mut buf = Vec::new();
        wire::emit_blob(&value, &mut buf)?;
        assert_eq!(wire::parse_blob(&mut buf.as_slice())?, value);
    }
    Ok(())
}

fn vectors_round_trip() -> KnnResult<()> {
    let vectors: [Vec<f64>; 3] = [
        vec![],
        vec![1.0, -2.5, 0.0],
        vec![f64::NAN, f64::INFINITY, f64::MIN],
    ];
    for value in vectors {
        let mut buf = Vec::new();
        wire::emit_f64_vec(&value, &mut buf)?;
        let read_back = wire::parse_f64_vec(&mut buf.as_slice())?;
        assert_eq!(read_back.len(), value.len());
        for (a, b) in read_back.iter().zip(&value) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
    Ok(())
}

fn data_points_round_trip() -> KnnResult<()> {
    let points = [
        DataPoint::new(vec![1.0, 2.0, 3.0], "Iris-setosa"),
        DataPoint::new(vec![], ""),
        DataPoint::new(vec![-0.0, f64::INFINITY], "x"),
    ];
    for point in points {
        let mut buf = Vec::new();
        point.sync_emit(&mut buf)?;
        let read_back = DataPoint::parse_sync(&mut buf.as_slice())?;
        assert_eq!(read_back.label(), point.label());
        assert_eq!(read_back.arity(), point.arity());
        for (a, b) in read_back.features().iter().zip(point.features()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
    Ok(())
}

// The wire is little-endian independently of the host.
fn layout_is_little_endian() -> KnnResult<()> {
    let mut buf = Vec::new();
    wire::emit_u32(0x0403_0201, &mut buf)?;
    assert_eq!(buf, [1, 2, 3, 4]);

    let mut buf = Vec::new();
    wire::emit_string("AB", &mut buf)?;
    assert_eq!(buf, [2, 0, 0, 0, 0, 0, 0, 0, b'A', b'B']);
    Ok(())
}

fn truncated_input_is_peer_closed() {
    let mut buf = Vec::new();
    wire::emit_string("truncate me", &mut buf).unwrap();
    for cut in 0..buf.len() {
        let result = wire::parse_string(&mut &buf[..cut]);
        assert!(matches!(result, Err(KnnError::PeerClosed)), "cut at {cut}");
    }
}
