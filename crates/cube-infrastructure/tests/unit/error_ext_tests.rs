//! Error Extension Tests

use cube_domain::error::{Error, Result};
use cube_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context_keeps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let parse_error = "abc".parse::<u16>().unwrap_err();

    let result: Result<u16> = Err(parse_error).config_context("Invalid port");

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.starts_with("Invalid port: "));
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_context_maps_to_internal_error() {
    let parse_error = "x".parse::<u8>().unwrap_err();

    let result: Result<u8> = Err(parse_error).context("Failed to read driver count");

    match result {
        Err(Error::Internal { message }) => {
            assert!(message.starts_with("Failed to read driver count: "));
        }
        _ => panic!("Expected Internal error"),
    }
}
