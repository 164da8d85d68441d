//! netres: network resource enumeration
//!
//! A library for listing the network resources (shares, servers, domains,
//! printers) that the operating system's network provider reports, with
//! filtering and text/JSON rendering of the results.

pub mod config;
pub mod network;
pub mod output;
