#![allow(missing_docs)]

use bytes::Bytes;
use multisplit::{DecodeError, decode, decode_with_boundary};

#[test]
fn decodes_json_and_image_parts() {
    let image_bytes: [u8; 17] = [
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
        b'R', 0xFF,
    ];

    let mut buffer = Vec::new();
    buffer.extend_from_slice(b"--B\r\nContent-Type: application/json\r\n\r\n");
    buffer.extend_from_slice(b"{\"message\":\"ok\",\"status\":\"done\"}");
    buffer.extend_from_slice(b"\r\n--B\r\nContent-Type: image/png\r\n\r\n");
    buffer.extend_from_slice(&image_bytes);
    buffer.extend_from_slice(b"\r\n--B--\r\n");

    let result = decode(buffer, "multipart/mixed; boundary=B").expect("decode should succeed");
    assert_eq!(result.len(), 2);

    let json = &result.parts()[0];
    assert_eq!(json.content_type(), Some("application/json"));
    assert_eq!(json.text(), Some("{\"message\":\"ok\",\"status\":\"done\"}"));

    let image = &result.parts()[1];
    assert_eq!(image.content_type(), Some("image/png"));
    assert_eq!(image.body(), &Bytes::copy_from_slice(&image_bytes));
}

#[test]
fn preserves_every_byte_value_in_a_binary_body() {
    let payload: Vec<u8> = (0u8..=255).collect();

    let mut buffer = Vec::new();
    buffer.extend_from_slice(b"--BOUND\r\nContent-Type: application/octet-stream\r\n\r\n");
    buffer.extend_from_slice(&payload);
    buffer.extend_from_slice(b"\r\n--BOUND--\r\n");

    let result =
        decode(buffer, "multipart/mixed; boundary=BOUND").expect("decode should succeed");
    assert_eq!(result.len(), 1);
    assert_eq!(result.parts()[0].body().as_ref(), payload.as_slice());
    assert_eq!(result.parts()[0].text(), None);
}

#[test]
fn boundary_lookalike_inside_a_body_line_does_not_split_the_part() {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(b"--B\r\nContent-Type: application/octet-stream\r\n\r\n");
    buffer.extend_from_slice(b"\x00\x01--B\x02 still the same part");
    buffer.extend_from_slice(b"\r\n--B--\r\n");

    let result = decode(buffer, "multipart/mixed; boundary=B").expect("decode should succeed");
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.parts()[0].body().as_ref(),
        b"\x00\x01--B\x02 still the same part"
    );
}

#[test]
fn round_trips_multiple_parts_with_preamble_and_epilogue() {
    let bodies: [&[u8]; 3] = [b"first", b"\xde\xad\xbe\xef", b""];

    let mut buffer = Vec::new();
    buffer.extend_from_slice(b"ignored preamble\r\n");
    for (index, body) in bodies.iter().enumerate() {
        buffer.extend_from_slice(b"--SEP\r\n");
        buffer.extend_from_slice(format!("X-Index: {index}\r\n").as_bytes());
        buffer.extend_from_slice(b"\r\n");
        buffer.extend_from_slice(body);
        buffer.extend_from_slice(b"\r\n");
    }
    buffer.extend_from_slice(b"--SEP--\r\nignored epilogue");

    let result = decode(buffer, "multipart/mixed; boundary=SEP").expect("decode should succeed");
    assert_eq!(result.len(), bodies.len());
    for (index, part) in result.iter().enumerate() {
        assert_eq!(part.headers().get("X-Index"), Some(index.to_string().as_str()));
        assert_eq!(part.body().as_ref(), bodies[index]);
    }
}

#[test]
fn decodes_part_with_lone_blank_line_and_no_headers() {
    let buffer = b"--B\r\n\r\nheaderless body\r\n--B--\r\n";

    let result =
        decode(&buffer[..], "multipart/mixed; boundary=B").expect("decode should succeed");
    assert_eq!(result.len(), 1);
    assert!(result.parts()[0].headers().is_empty());
    assert_eq!(result.parts()[0].body().as_ref(), b"headerless body");
}

#[test]
fn decodes_lf_only_buffers() {
    let buffer = b"--B\nContent-Type: text/plain\n\nplain body\n--B--\n";

    let result =
        decode(&buffer[..], "multipart/mixed; boundary=B").expect("decode should succeed");
    assert_eq!(result.len(), 1);
    assert_eq!(result.parts()[0].content_type(), Some("text/plain"));
    assert_eq!(result.parts()[0].body().as_ref(), b"plain body");
}

#[test]
fn decode_with_boundary_skips_content_type_extraction() {
    let buffer = b"--Z9\r\nA: 1\r\n\r\nvalue\r\n--Z9--\r\n";

    let result = decode_with_boundary(&buffer[..], "Z9").expect("decode should succeed");
    assert_eq!(result.len(), 1);
    assert_eq!(result.parts()[0].body().as_ref(), b"value");
}

#[test]
fn fails_when_content_type_lacks_a_boundary() {
    let buffer = b"--B\r\nA: 1\r\n\r\nvalue\r\n--B--\r\n";

    let err = decode(&buffer[..], "multipart/mixed").expect_err("must fail");
    assert_eq!(err, DecodeError::MissingBoundary);
}

#[test]
fn fails_on_unterminated_body() {
    let buffer = b"--B\r\nA: 1\r\n\r\nvalue but no closing delimiter\r\n";

    let err = decode(&buffer[..], "multipart/mixed; boundary=B").expect_err("must fail");
    assert_eq!(err, DecodeError::UnterminatedMultipart { offset: 0 });
}

#[test]
fn fails_on_buffer_with_only_a_closing_delimiter() {
    let buffer = b"preamble only\r\n--B--\r\n";

    let err = decode(&buffer[..], "multipart/mixed; boundary=B").expect_err("must fail");
    assert_eq!(err, DecodeError::NoParts);
}

#[test]
fn one_malformed_part_fails_the_whole_decode() {
    let buffer = concat!(
        "--B\r\n",
        "A: 1\r\n",
        "\r\n",
        "good part\r\n",
        "--B\r\n",
        "A: 2 but no blank line follows\r\n",
        "--B--\r\n"
    )
    .as_bytes();

    let err = decode(buffer, "multipart/mixed; boundary=B").expect_err("must fail");
    assert!(matches!(err, DecodeError::MalformedPart { .. }));
}

#[test]
fn one_malformed_header_line_fails_the_whole_decode() {
    let buffer = concat!(
        "--B\r\n",
        "A: 1\r\n",
        "broken header line\r\n",
        "\r\n",
        "body\r\n",
        "--B--\r\n"
    )
    .as_bytes();

    let err = decode(buffer, "multipart/mixed; boundary=B").expect_err("must fail");
    assert!(matches!(err, DecodeError::MalformedHeaderLine { .. }));
}
