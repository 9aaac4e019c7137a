pub mod overlay_mapper;
