//! HTML特征提取模块

mod html_extractor;

pub use html_extractor::{HtmlExtractor, PageFeatures, extract_features};
