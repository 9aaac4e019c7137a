pub mod cpu_swap_compositor;
pub mod resample;
