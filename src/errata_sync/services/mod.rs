pub mod errata_fetcher;

pub use errata_fetcher::ErrataFetcher;
