use std::error::Error;
use std::io;
use seqread_common::SeqReadError;

#[test]
fn test_config_error_display() {
    assert_eq!(SeqReadError::MissingDir.to_string(), "You must set --dir.");
    assert_eq!(
        SeqReadError::ZeroReadSize.to_string(),
        "--read_size must be greater than zero."
    );
}

#[test]
fn test_io_error_display_carries_context() {
    let err = SeqReadError::TempFile(io::Error::new(io::ErrorKind::NotFound, "no such dir"));
    assert_eq!(err.to_string(), "TempFile: no such dir");

    let err = SeqReadError::FillRandom(io::Error::new(io::ErrorKind::Other, "disk full"));
    assert_eq!(err.to_string(), "Copying random bytes: disk full");

    let err = SeqReadError::CloseAfterWrite(io::Error::new(io::ErrorKind::Other, "EIO"));
    assert_eq!(err.to_string(), "Closing file: EIO");

    let err = SeqReadError::Open(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert_eq!(err.to_string(), "Opening file: denied");

    let err = SeqReadError::Read(io::Error::new(io::ErrorKind::Other, "bad sector"));
    assert_eq!(err.to_string(), "Reading: bad sector");

    let err = SeqReadError::CloseAfterRead(io::Error::new(io::ErrorKind::Other, "stale handle"));
    assert_eq!(err.to_string(), "Closing file after reading: stale handle");
}

#[test]
fn test_io_error_is_exposed_as_source() {
    let err = SeqReadError::Read(io::Error::new(io::ErrorKind::UnexpectedEof, "short"));
    let source = err.source().expect("read error should carry its io::Error");
    assert_eq!(source.to_string(), "short");
    assert!(SeqReadError::MissingDir.source().is_none());
}
