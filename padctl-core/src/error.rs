//! Error types for padctl-core

/// Result type alias for parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading `xinput` output
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A listing line matched the device name but carries no `id=<N>` token
    #[error("No device id in listing line: {line:?}")]
    MissingDeviceId {
        line: String,
    },
    
    /// The property listing has no "Device Enabled" line
    #[error("Device {device_id} has no \"Device Enabled\" property")]
    MissingEnabledProperty {
        device_id: String,
    },
    
    /// A "Device Enabled" line does not look like `(<id>): <0|1>`
    #[error("Malformed \"Device Enabled\" line: {line:?}")]
    MalformedProperty {
        line: String,
    },
    
    /// An extracted token was rejected by the identifier types
    #[error("Type error: {0}")]
    Types(#[from] padctl_types::Error),
}
