/// Ports module defining interfaces for hexagonal architecture
///
/// The CLI drives the render use case directly, so only outbound ports
/// (infrastructure interfaces) are defined here.
pub mod outbound;
