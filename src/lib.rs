pub mod cache;
pub mod config;
pub mod exception;
pub mod model;
pub mod nav;
pub mod pages;
pub mod param;
pub mod request;
pub mod response;
pub mod route;
pub mod shell;
pub mod util;
pub mod view;

pub use cache::FileCache;
pub use config::Config;
pub use exception::Exception;
pub use model::UsageEntry;
pub use param::{HttpEncoding, HttpRequestMethod, HttpVersion};
pub use request::Request;
pub use response::Response;
pub use route::{Route, Router};
pub use util::HtmlBuilder;
pub use view::Node;
