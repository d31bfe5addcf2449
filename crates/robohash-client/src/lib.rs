#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod image;
mod options;
mod request;
mod url;
pub mod util;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultRoboHashClient, RoboHashClient};

// Configuration
pub use config::RoboHashClientConfig;

// Errors
pub use error::{RoboHashError, RoboHashResult};

// HTTP seam
pub use http::{HttpBackend, HttpBody, ReqwestBackend};

// Downloaded images
pub use image::{ImageFormat, RoboHashImage};

// Request options
pub use options::{BackgroundSet, ImageExtension, ImageSet, UrlParameter, UseGravatar};

// Request building
pub use request::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RoboHashRequestBuilder};
pub use crate::url::{DEFAULT_BASE_URL, build_request_url, render_request_url};
