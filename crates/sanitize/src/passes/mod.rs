// ABOUTME: The individual rewrite passes applied by the transformer pipeline.
// ABOUTME: One module per pass; Pipeline::default_passes decides the order.

//! Heuristic rewrite passes.
//!
//! Each pass has narrow trigger conditions and length caps so that it errs
//! toward leaving legitimate content alone. None of them report misfires.

mod assign_heading_ids;
mod coalesce_bullets;
mod coalesce_roman;
mod decorate_images;
mod demote_headings;
mod drop_sections;
mod embed_videos;
mod harden_links;
mod promote_headings;
mod rewrite_callouts;
mod split_line_breaks;
mod split_long_paragraphs;
mod strip_brand;
mod strip_disallowed;
mod strip_meta_noise;
mod strip_presentation;
mod strip_stray_punctuation;
mod unwrap_marks;
mod wrap_tables;

pub use assign_heading_ids::AssignHeadingIds;
pub use coalesce_bullets::CoalesceBullets;
pub use coalesce_roman::CoalesceRoman;
pub use decorate_images::DecorateImages;
pub use demote_headings::DemoteHeadings;
pub use drop_sections::DropSections;
pub use embed_videos::EmbedVideos;
pub use harden_links::HardenLinks;
pub use promote_headings::PromoteHeadings;
pub use rewrite_callouts::{CalloutKind, RewriteCallouts};
pub use split_line_breaks::SplitLineBreaks;
pub use split_long_paragraphs::SplitLongParagraphs;
pub use strip_brand::StripBrand;
pub use strip_disallowed::StripDisallowed;
pub use strip_meta_noise::StripMetaNoise;
pub use strip_presentation::StripPresentation;
pub use strip_stray_punctuation::StripStrayPunctuation;
pub use unwrap_marks::UnwrapMarks;
pub use wrap_tables::WrapTables;
