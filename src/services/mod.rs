// Services module: domain logic separated from the command surface

pub mod cycle;
pub mod dates;
pub mod gemini;
pub mod pregnancy;
pub mod tips;
