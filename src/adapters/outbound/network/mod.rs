/// Network adapters for downloading package archives
mod http_fetcher;

pub use http_fetcher::HttpPackageFetcher;
