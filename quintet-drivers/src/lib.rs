//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in quintet-core:
//!
//! - Shift-register segment panel with row multiplexing

#![no_std]
#![deny(unsafe_code)]

pub mod panel;
