//! Error types for helix-field.
//!
//! [`HelixError`] covers configuration, color parsing and preset I/O.
//! [`GpuError`] and [`ViewerError`] cover the viewer's window and GPU setup.

use std::fmt;

/// Errors produced while building, validating, loading or generating a helix.
#[derive(Debug)]
pub enum HelixError {
    /// A configuration field is outside the range the generator accepts.
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// Human readable constraint that was violated.
        reason: &'static str,
    },
    /// A color string could not be parsed as `#rrggbb` or `#rgb`.
    InvalidColor(String),
    /// Failed to read or write a preset file.
    Io(std::io::Error),
    /// Preset file is not valid JSON for a [`HelixConfig`](crate::HelixConfig).
    Json(serde_json::Error),
}

impl HelixError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        HelixError::InvalidConfiguration { field, reason }
    }
}

impl fmt::Display for HelixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelixError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration: `{}` {}", field, reason)
            }
            HelixError::InvalidColor(s) => {
                write!(f, "Invalid color {:?}: expected #rrggbb or #rgb", s)
            }
            HelixError::Io(e) => write!(f, "Failed to access preset file: {}", e),
            HelixError::Json(e) => write!(f, "Failed to parse preset: {}", e),
        }
    }
}

impl std::error::Error for HelixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HelixError::Io(e) => Some(e),
            HelixError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HelixError {
    fn from(e: std::io::Error) -> Self {
        HelixError::Io(e)
    }
}

impl From<serde_json::Error> for HelixError {
    fn from(e: serde_json::Error) -> Self {
        HelixError::Json(e)
    }
}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the viewer.
#[derive(Debug)]
pub enum ViewerError {
    /// Failed to create or run the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// The initial configuration was rejected.
    Config(HelixError),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            ViewerError::Window(e) => write!(f, "Failed to create window: {}", e),
            ViewerError::Gpu(e) => write!(f, "GPU error: {}", e),
            ViewerError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::EventLoop(e) => Some(e),
            ViewerError::Window(e) => Some(e),
            ViewerError::Gpu(e) => Some(e),
            ViewerError::Config(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for ViewerError {
    fn from(e: winit::error::EventLoopError) -> Self {
        ViewerError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for ViewerError {
    fn from(e: winit::error::OsError) -> Self {
        ViewerError::Window(e)
    }
}

impl From<GpuError> for ViewerError {
    fn from(e: GpuError) -> Self {
        ViewerError::Gpu(e)
    }
}

impl From<HelixError> for ViewerError {
    fn from(e: HelixError) -> Self {
        ViewerError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message_names_field() {
        let err = HelixError::invalid("radius", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: `radius` must be greater than zero"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        let err: HelixError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
