//! Render-time text segmentation

pub mod emphasis;
