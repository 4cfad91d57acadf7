#![allow(dead_code)]

pub mod channel;
