pub mod aggregated;
pub mod header_block;
pub mod image_block;
pub mod paragraph_block;
pub mod post;

pub use aggregated::{Block, PostWithBlocks};
pub use header_block::HeaderBlock;
pub use image_block::{FileRef, ImageBlock};
pub use paragraph_block::ParagraphBlock;
pub use post::Post;
