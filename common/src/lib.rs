//! Photo Gallery Common Library
//!
//! CLIとレンダリング層で共有されるメディアリストの型と処理

pub mod types;
pub mod error;
pub mod normalize;
pub mod processor;
pub mod source;
pub mod view;

pub use types::{KindFilter, MediaItem, MediaKind, MediaName};
pub use error::{Error, Result};
pub use normalize::{has_media_extension, normalized_key};
pub use processor::{
    build_presentation_list, dedupe, duplicate_report, interleave, interleave_round_robin,
    shuffle, DuplicateEntry, InterleavePolicy, MediaListProcessor,
};
pub use source::{names_from_value, parse_name_list, parse_name_list_or_empty};
pub use view::{Gallery, GalleryView};
