pub mod carousel;
pub mod template;
