mod reqwest_http_transport;

pub use reqwest_http_transport::ReqwestHttpTransport;
