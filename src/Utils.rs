#![allow(non_snake_case)]
/// console and file logger setup built on simplelog
pub mod logger;
