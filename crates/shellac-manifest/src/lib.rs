//! Declarative document manifest for the shellac HTML assembler.
//!
//! This crate provides the data model for `shellac.toml`: document pages with
//! doctype, title, meta entries, asset lists, and body, plus loading and
//! validation.

pub mod asset;
pub mod document;

pub use asset::{AssetEntry, AssetSpec, Attrs, DetailedAsset};
pub use document::{Body, BodySpec, Dest, Manifest, ManifestError, MetaEntry, Page};
