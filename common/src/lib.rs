//! Office AI Common Library
//!
//! CLIとデスクトップビューアで共有される型とユーティリティ

pub mod office;
pub mod report;
pub mod result;

pub use office::Office;
pub use report::ClassifyReport;
pub use result::{ClassificationResult, ClassifierError, DisplayText};
