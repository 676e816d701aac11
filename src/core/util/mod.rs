pub mod colour_math;
pub mod pixel_to_complex_coords;
