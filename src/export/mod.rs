//! Build-instruction and part-count files.

pub mod ldraw;
pub mod part_list;

pub use ldraw::render_build_file;
pub use part_list::{count_parts, render_part_list};
