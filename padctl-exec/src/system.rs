//! Blocking `std::process` runner

use std::io;
use std::process::Command;

use tracing::{debug, trace};

use crate::{error::*, Runner};

/// Runner that spawns a real process
pub struct SystemRunner {
    program: String,
}

impl SystemRunner {
    /// Create new runner for `program` (looked up on `PATH` if not absolute)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Runner for SystemRunner {
    fn run(&self, args: &[String]) -> Result<String> {
        debug!("Running {} {}", self.program, args.join(" "));
        
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::NotFound {
                    program: self.program.clone(),
                },
                _ => Error::Spawn(e),
            })?;
        
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!("{} failed ({}): {}", self.program, output.status, stderr);
            return Err(Error::NonZeroExit {
                program: self.program.clone(),
                code: output.status.code(),
                stderr,
            });
        }
        
        trace!("Received {} bytes from {}", output.stdout.len(), self.program);
        
        Ok(String::from_utf8(output.stdout)?)
    }
    
    fn program(&self) -> String {
        self.program.clone()
    }
}
