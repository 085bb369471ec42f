use super::*;

mod token;
mod track;

pub use self::{token::*, track::*};
