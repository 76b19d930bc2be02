//! Types shared by the planet walker engine and its hosts.

pub mod config;
pub mod geom;
pub mod protocol;
pub mod vec3;
