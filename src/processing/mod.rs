//! Resume document model and scoring passes

pub mod document;
pub mod text_processor;
pub mod ats_scorer;
pub mod improvements;
pub mod bullet_guidance;
pub mod export_check;
