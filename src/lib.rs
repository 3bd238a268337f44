//! Shared data model and text helpers for multimedia applications.
//!
//! Two facilities:
//! - [`MediaDescriptor`]: a plain record describing a media file (name, size,
//!   type tag, local path). No I/O, no content validation.
//! - [`text`]: stateless blank checks and UTF-8 encode/decode helpers.
//!
//! Every operation is pure and synchronous; the crate holds no state between
//! calls and may be used from any number of threads without coordination.

pub mod media;
pub mod text;

pub use media::{MediaDescriptor, MediaKind};
pub use text::{
    decode_buffer, decode_bytes, encode_into, encode_to_bytes, is_blank, is_not_blank, EncodeInto,
};
