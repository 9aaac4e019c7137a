pub mod detections;
pub mod face_detector;
