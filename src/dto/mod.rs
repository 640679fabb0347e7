//! DTOs that bridge the API port, the services and the page port.

pub mod api;
