pub mod presentation;
pub mod slide;
pub mod template;
