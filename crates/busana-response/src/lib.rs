//! Reply assembly for the Busana assistant

mod assembler;
mod payload;

pub use assembler::ResponseAssembler;
pub use payload::{ClothingPick, Response, SeasonPick, StructuredPayload, WeatherPick};
