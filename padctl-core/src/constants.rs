//! Shared constants

/// Device name substring used when none is given
pub const DEFAULT_DEVICE_NAME: &str = "Sentelic";

/// Device-management binary invoked when none is configured
pub const DEFAULT_XINPUT: &str = "xinput";

/// Label of the boolean property that enables a device
pub const ENABLED_LABEL: &str = "Device Enabled";

/// Process exit status for any failure
pub const EXIT_FAILURE: u8 = 1;

/// Environment variables read by the command line
pub mod env {
    /// Overrides the default device name
    pub const DEVICE: &str = "PADCTL_DEVICE";
    
    /// Overrides the `xinput` binary
    pub const XINPUT: &str = "PADCTL_XINPUT";
}
