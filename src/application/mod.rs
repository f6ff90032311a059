pub mod mappers;
pub mod usercases;
pub mod validators;
