//! # thumbcache
//!
//! Cached crop/scale derivatives for images served from a web document root.
//! Give it a public image URL and a target box; it computes a proportional
//! center crop, resamples into the box, writes the result next to the source
//! as `{stem}-{w}x{h}.{ext}`, and returns the derivative's URL, measured
//! dimensions, and mime type. If the derivative file already exists, the
//! whole pipeline is skipped and the cached file is described instead.
//!
//! # Control Flow
//!
//! ```text
//! url ──resolve──▶ source path ──derivative path──▶ exists?
//!                                    │ yes: re-measure, done
//!                                    │ no:  identify → plan crop →
//!                                    ▼       resample → chmod → re-measure
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resize`] | Orchestrator — validation, cache check, degraded mode, descriptor construction |
//! | [`cache`] | Deterministic derivative path + extension-forcing policy |
//! | [`resolver`] | URL → filesystem path, multi-tenant prefix remapping |
//! | [`imaging`] | Crop planning math, [`ImageBackend`](imaging::ImageBackend) trait, `image`-crate backend |
//! | [`config`] | `thumbcache.toml` loading and validation |
//!
//! # Design Decisions
//!
//! ## One Orchestrator, Pluggable Backends
//!
//! Crop planning and cache policy are backend-agnostic; everything that
//! touches pixels sits behind the [`imaging::ImageBackend`] trait. The
//! production backend is the pure-Rust `image` crate (Lanczos3 resampling,
//! statically linked — no ImageMagick, no system dependencies); tests use a
//! recording mock. If the compiled-in codec set is somehow unusable, the
//! orchestrator degrades to a passthrough descriptor pointing at the
//! original image rather than failing.
//!
//! ## Existence Is the Cache
//!
//! The derivative path is a pure function of source path and target box, so
//! a plain `exists()` check is the entire cache lookup — no manifest to
//! maintain or invalidate. The flip side: entries never expire, and nothing
//! here cleans them up. Concurrent generation of the same derivative races
//! last-writer-wins; callers that care dedupe upstream.
//!
//! ## Measured, Not Requested
//!
//! Descriptors always report the encoded file's actual dimensions (a header
//! read), on cache hits as well as misses. Echoing the requested box would
//! be cheaper but lies whenever an external process replaced the cached
//! file.

pub mod cache;
pub mod config;
pub mod imaging;
pub mod resize;
pub mod resolver;

pub use config::AppConfig;
pub use imaging::{ImageBackend, ImageCrateBackend};
pub use resize::{Derivative, ResizeError, ResizeOptions, Resizer};
