//! HAR (HTTP Archive) capture files: on-disk model and loader.

mod load;
mod parse;

pub use load::{load_archive, require_har_extension};
pub use parse::{
    Archive, Body, Creator, Entry, Header, Log, Method, QueryParam, Request, Response,
};
