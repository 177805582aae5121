//! Hand-written blobs decoded through the facade

use cmdreplay::{
    decode_scalar, decode_string, decode_string_map, decode_string_sequence,
    decode_tagged_sequence, Complex64, ReplayError, TagPolicy, Value,
};

#[test]
fn string_sequence_scenario() {
    #[rustfmt::skip]
    let blob: Vec<u8> = [
        &[3, 0, 0, 0][..],
        &[5, 0, 0, 0], b"hello",
        &[3, 0, 0, 0], b"bye",
        &[2, 0, 0, 0], b"ok",
    ]
    .concat();

    assert_eq!(
        decode_string_sequence(&blob).unwrap(),
        vec!["hello", "bye", "ok"]
    );
}

#[test]
fn int64_scenario() {
    assert_eq!(decode_scalar::<i64>(&[1, 0, 0, 0, 0, 0, 0, 0]).unwrap(), 1);
    assert!(matches!(
        decode_scalar::<i64>(&[1, 0, 0, 0, 0, 0, 0]),
        Err(ReplayError::MalformedScalar { expected: 8, actual: 7, .. })
    ));
}

#[test]
fn string_is_verbatim() {
    assert_eq!(decode_string(b"QUEUED"), "QUEUED");
    assert_eq!(decode_string(b""), "");
}

#[test]
fn map_wire_bytes() {
    #[rustfmt::skip]
    let blob: Vec<u8> = [
        &[1, 0, 0, 0][..],
        &[3, 0, 0, 0], b"key",
        &[5, 0, 0, 0], b"value",
    ]
    .concat();

    let map = decode_string_map(&blob).unwrap();
    assert_eq!(map.get("key").map(String::as_str), Some("value"));
}

#[test]
fn tagged_wire_bytes() {
    #[rustfmt::skip]
    let blob: Vec<u8> = [
        &[2, 0, 0, 0][..],
        &[9, 0, 0, 0], b"complex64",
        &[8, 0, 0, 0], &1.0f32.to_le_bytes(), &2.0f32.to_le_bytes(),
        &[8, 0, 0, 0], &0.0f32.to_le_bytes(), &(-1.0f32).to_le_bytes(),
    ]
    .concat();

    let seq = decode_tagged_sequence(&blob, TagPolicy::Strict).unwrap();
    assert_eq!(
        seq.values,
        vec![
            Value::Complex64(Complex64::new(1.0, 2.0)),
            Value::Complex64(Complex64::new(0.0, -1.0)),
        ]
    );
}

#[test]
fn unknown_tag_is_unsupported() {
    #[rustfmt::skip]
    let blob: Vec<u8> = [
        &[1, 0, 0, 0][..],
        &[8, 0, 0, 0], b"notatype",
        &[1, 0, 0, 0], &[0],
    ]
    .concat();

    assert_eq!(
        decode_tagged_sequence(&blob, TagPolicy::Strict).unwrap_err(),
        ReplayError::UnsupportedType("notatype".to_string())
    );
}

#[test]
fn tag_names_are_case_sensitive() {
    #[rustfmt::skip]
    let blob: Vec<u8> = [
        &[1, 0, 0, 0][..],
        &[4, 0, 0, 0], b"Bool",
        &[1, 0, 0, 0], &[1],
    ]
    .concat();

    assert!(matches!(
        decode_tagged_sequence(&blob, TagPolicy::Strict),
        Err(ReplayError::UnsupportedType(_))
    ));
}

#[test]
fn mixed_width_integers_widen_consistently() {
    #[rustfmt::skip]
    let blob: Vec<u8> = [
        &[2, 0, 0, 0][..],
        &[5, 0, 0, 0], b"int16",
        &[2, 0, 0, 0], &(-300i16).to_le_bytes(),
        &[2, 0, 0, 0], &(7i16).to_le_bytes(),
    ]
    .concat();

    let seq = decode_tagged_sequence(&blob, TagPolicy::Strict).unwrap();
    let widened: Vec<Option<i128>> = seq.values.iter().map(Value::as_i128).collect();
    assert_eq!(widened, vec![Some(-300), Some(7)]);
    assert_eq!(seq.values[0].as_bool(), None);

    let max = decode_tagged_sequence(
        &[
            &[1, 0, 0, 0][..],
            &[7, 0, 0, 0], b"uintptr",
            &[8, 0, 0, 0], &u64::MAX.to_le_bytes(),
        ]
        .concat(),
        TagPolicy::Strict,
    )
    .unwrap();
    assert_eq!(max.values[0].as_i128(), Some(u64::MAX as i128));
}

#[test]
fn bool_elements_accept_any_nonzero_byte() {
    #[rustfmt::skip]
    let blob: Vec<u8> = [
        &[3, 0, 0, 0][..],
        &[4, 0, 0, 0], b"bool",
        &[1, 0, 0, 0], &[0],
        &[1, 0, 0, 0], &[1],
        &[1, 0, 0, 0], &[0x80],
    ]
    .concat();

    let seq = decode_tagged_sequence(&blob, TagPolicy::Strict).unwrap();
    let flags: Vec<Option<bool>> = seq.values.iter().map(Value::as_bool).collect();
    assert_eq!(flags, vec![Some(false), Some(true), Some(true)]);
    assert_eq!(seq.values[1].as_i128(), None);
}
