//! Process errors

use std::io;
use std::string::FromUtf8Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Program not found: {program}")]
    NotFound {
        program: String,
    },
    
    #[error("Failed to start process: {0}")]
    Spawn(#[from] io::Error),
    
    #[error("{program} exited with {}: {stderr}", describe_exit(.code))]
    NonZeroExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    
    #[error("Output is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}
