pub mod complex_to_pixel_index;
