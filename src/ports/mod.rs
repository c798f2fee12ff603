/// Ports layer - Interface definitions
///
/// Defines the boundaries between the pipeline core and the
/// infrastructure that drives it.
pub mod outbound;
