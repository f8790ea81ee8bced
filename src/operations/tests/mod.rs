mod traversal_tests;
mod bounding_box_tests;
mod sampler_tests;
