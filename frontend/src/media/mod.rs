//! Lazy media loading: link parsing, thumbnail resolution, viewport
//! gating, the single media overlay and strip paging.

pub mod gallery;
pub mod identifier;
pub mod modal;
pub mod mount;
pub mod thumbnail;

pub use identifier::{extract_identifier, MediaReference, ResolvedMediaIdentifier, Variant};
pub use modal::{use_media_modal, EmbedParams, ModalHandle, PlayRequest};
pub use mount::{use_viewport_gate, MountConfig};
pub use thumbnail::{use_resolved_thumbnail, ThumbnailTier};
