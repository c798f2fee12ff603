mod mock_collection_writer;
mod mock_sync_observer;
mod mock_transport;

pub use mock_collection_writer::MockCollectionWriter;
pub use mock_sync_observer::MockSyncObserver;
pub use mock_transport::MockTransport;
