//! qrl: a single-endpoint HTTP service
//!
//! `GET /` returns a static HTML page; `PUT /` turns the request body into a
//! QR code PNG. Everything else is answered with 405.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod qr;
pub mod server;
