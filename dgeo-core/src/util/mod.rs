pub mod fingerprint;
pub mod polygon;
