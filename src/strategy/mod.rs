// Fri Oct 16 2026 - Alex

pub mod annotate;
pub mod cache;
pub mod enumerate;
pub mod filter;
pub mod fshare;
pub mod group;
pub mod nope;
pub mod pad;
pub mod pipe;
pub mod registry;
pub mod sort;
pub mod tag;
pub mod tagger;

pub use annotate::Annotate;
pub use cache::CacheRounding;
pub use enumerate::Enumerate;
pub use filter::FilterPads;
pub use fshare::FalseSharing;
pub use group::Group;
pub use nope::Nope;
pub use pad::{Pad, PadKind};
pub use pipe::Pipe;
pub use registry::{Builder, Registry};
pub use sort::{Sort, SortKey};
pub use tagger::{TagMode, Tagger};

use crate::engine::Context;
use crate::error::Result;
use crate::structure::Structure;
use std::sync::Arc;

pub const NOPE: &str = "nope";
pub const PAD_SYSTEM_ALIGNMENT: &str = "explicit_paddings_system_alignment";
pub const PAD_TYPE_NATURAL: &str = "explicit_paddings_type_natural";
pub const FALSE_SHARING_L1: &str = "false_sharing_cpu_l1";
pub const FALSE_SHARING_L2: &str = "false_sharing_cpu_l2";
pub const FALSE_SHARING_L3: &str = "false_sharing_cpu_l3";
pub const CACHE_ROUNDING_L1: &str = "cache_rounding_cpu_l1";
pub const CACHE_ROUNDING_L2: &str = "cache_rounding_cpu_l2";
pub const CACHE_ROUNDING_L3: &str = "cache_rounding_cpu_l3";
pub const MEMORY_PACK: &str = "memory_pack";
pub const NAME_ASCENDING: &str = "name_lexicographical_ascending";
pub const NAME_DESCENDING: &str = "name_lexicographical_descending";
pub const TYPE_ASCENDING: &str = "type_lexicographical_ascending";
pub const FILTER_PADS: &str = "filter_pads";
pub const COMMENT_ANNOTATE: &str = "comment_struct_annotate";
pub const TAG_SOFT: &str = "add_tag_group_soft";
pub const TAG_FORCE: &str = "add_tag_group_force";
pub const TAG_SOFT_DISCRETE: &str = "add_tag_group_discrete";
pub const TAG_FORCE_DISCRETE: &str = "add_tag_group_force_discrete";
pub const TAG_GROUP: &str = "process_tag_group";

/// One layout transformation. Implementations never mutate their input;
/// they return a new struct or an error, never both.
pub trait Strategy: Send + Sync {
    fn apply(&self, ctx: &Context, o: &Structure) -> Result<Structure>;
}

pub type SharedStrategy = Arc<dyn Strategy>;
