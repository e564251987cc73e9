mod common;

use std::io::{Read, Write};

use common::require_sdl;
use opencnc_sdl3::iostream::props;
use opencnc_sdl3::{IoStatus, IoStream, IoWhence, load_file, save_file};
use pretty_assertions::assert_eq;

#[test]
fn memory_stream_reads_and_seeks() {
    require_sdl!();
    let data = b"G0 X10 Y20\n";
    let mut stream = IoStream::from_const_mem(data).unwrap();
    assert_eq!(stream.size().unwrap(), data.len() as u64);

    let mut head = [0u8; 2];
    assert_eq!(stream.read(&mut head).unwrap(), 2);
    assert_eq!(&head, b"G0");
    assert_eq!(stream.tell().unwrap(), 2);

    assert_eq!(stream.seek(-3, IoWhence::End).unwrap(), data.len() as u64 - 3);
    let mut rest = Vec::new();
    stream.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b"20\n");
    assert_eq!(stream.status(), IoStatus::Eof);
}

#[test]
fn const_memory_is_read_only() {
    require_sdl!();
    let mut stream = IoStream::from_const_mem(b"abc").unwrap();
    assert!(matches!(stream.write(b"x"), Ok(0) | Err(_)));
}

#[test]
fn writes_land_in_caller_buffer() {
    require_sdl!();
    let mut buffer = [0u8; 8];
    {
        let mut stream = IoStream::from_mem(&mut buffer).unwrap();
        stream.write_u16_be(0x0102).unwrap();
        stream.write_u32_le(0x0605_0403).unwrap();
        stream.write_all(b"xy").unwrap();
        stream.close().unwrap();
    }
    assert_eq!(buffer, [1, 2, 3, 4, 5, 6, b'x', b'y']);
}

#[test]
fn typed_reads_honour_endianness() {
    require_sdl!();
    let data = [0x12, 0x34, 0x12, 0x34, 0xff];
    let mut stream = IoStream::from_const_mem(&data).unwrap();
    assert_eq!(stream.read_u16_be().unwrap(), 0x1234);
    assert_eq!(stream.read_u16_le().unwrap(), 0x3412);
    assert_eq!(stream.read_s8().unwrap(), -1);
    assert!(stream.read_u8().is_err());
}

#[test]
fn dynamic_memory_grows() {
    require_sdl!();
    let mut stream = IoStream::from_dynamic_mem().unwrap();
    assert_eq!(stream.print("100%s done").unwrap(), 10);
    stream.write_u64_le(7).unwrap();
    assert_eq!(stream.size().unwrap(), 18);

    stream.seek(0, IoWhence::Set).unwrap();
    let all = stream.load_all().unwrap();
    assert_eq!(&all[..10], b"100%s done");

    let id = stream.properties().unwrap();
    assert!(id.has(props::DYNAMIC_MEMORY_POINTER).unwrap());
}

#[test]
fn file_round_trip() {
    require_sdl!();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("program.nc");

    save_file(&path, b"M3 S1000\n").unwrap();
    assert_eq!(load_file(&path).unwrap(), b"M3 S1000\n");
    assert_eq!(std::fs::read(&path).unwrap(), b"M3 S1000\n");

    let mut stream = IoStream::from_file(&path, "ab").unwrap();
    stream.save_all(b"M5\n").unwrap();
    stream.flush().unwrap();
    stream.close().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "M3 S1000\nM5\n");
}

#[test]
fn missing_file_is_an_error() {
    require_sdl!();
    let dir = tempfile::tempdir().unwrap();
    let err = IoStream::from_file(dir.path().join("nope"), "rb").unwrap_err();
    assert_eq!(err.subsystem(), "iostream");
    assert!(load_file(dir.path().join("nope")).is_err());
}
