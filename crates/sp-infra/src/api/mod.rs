mod http;

pub use http::HttpPlantApi;
