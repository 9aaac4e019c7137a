pub mod extract_faces_use_case;
pub mod overlay_faces_use_case;
pub mod swap_frame_use_case;
