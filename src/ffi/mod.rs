//! Foreign-function entry points. Only the JVM boundary exists today.

pub mod java;
