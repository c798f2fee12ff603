pub mod stderr_observer;

pub use stderr_observer::StderrObserver;
