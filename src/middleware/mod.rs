pub mod etag;

pub use etag::etag_middleware;
