//! Text and CSV reports over analysis results

mod matrix;
mod validation_text;

pub use matrix::{collision_matrix, shared_descendant_matrix, CategoryMatrix};
pub use validation_text::{
    write_collision_keys, write_search_results, write_validation_file, write_validation_report,
    VALIDATION_FILE_NAME,
};
