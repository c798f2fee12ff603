/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the pipeline core uses to
/// interact with external systems (network, file system, console).
pub mod collection_writer;
pub mod sync_observer;
pub mod transport;

pub use collection_writer::CollectionWriter;
pub use sync_observer::SyncObserver;
pub use transport::{HttpResponse, Transport};
