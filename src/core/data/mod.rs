pub mod canvas_size;
pub mod colour;
pub mod complex;
pub mod fractal_grid;
pub mod frame_buffer;
pub mod hsv_params;
pub mod iteration_result;
pub mod point;
pub mod render_request;
pub mod viewport;
