pub mod input_dto;
pub mod output_dto;
