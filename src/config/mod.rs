pub mod schema;

pub use schema::{BrowserConfig, Navigation, Output, ProbeConfig, Readiness, TargetUrl, Viewport};
