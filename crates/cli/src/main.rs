use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use swapcam_core::compositing::infrastructure::cpu_swap_compositor::CpuSwapCompositor;
use swapcam_core::detection::domain::face_detector::FaceDetector;
use swapcam_core::detection::infrastructure::flat_sequence_detector::FlatSequenceDetector;
use swapcam_core::filters::frame_filter::{
    FilterKind, DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST, DEFAULT_GAMMA, DEFAULT_PIXELATION,
};
use swapcam_core::io::domain::image_reader::ImageReader;
use swapcam_core::io::domain::image_writer::ImageWriter;
use swapcam_core::io::infrastructure::image_file_reader::ImageFileReader;
use swapcam_core::io::infrastructure::image_file_writer::ImageFileWriter;
use swapcam_core::overlay::overlay_mapper::OverlayUpdate;
use swapcam_core::pipeline::extract_faces_use_case::ExtractFacesUseCase;
use swapcam_core::pipeline::overlay_faces_use_case::OverlayFacesUseCase;
use swapcam_core::pipeline::swap_frame_use_case::SwapFrameUseCase;
use swapcam_core::shared::frame::Frame;
use swapcam_core::transform::orientation::{orient_for_detection, CameraFacing};

/// Face swapping, face-box overlays, and face crops for still images.
#[derive(Parser)]
#[command(name = "swapcam")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image (required unless --overlay or --crops is used).
    output: Option<PathBuf>,

    /// Face boxes as a flat list: left,top,right,bottom per face,
    /// in input-image pixel coordinates.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    boxes: Vec<i32>,

    /// Print view-space overlay rectangles for a WxH view instead of
    /// compositing.
    #[arg(long)]
    overlay: Option<String>,

    /// Save face crops into this directory instead of compositing.
    #[arg(long)]
    crops: Option<PathBuf>,

    /// Filter applied to the composited output:
    /// grayscale, brightness, contrast, gamma, or pixelation.
    #[arg(long)]
    filter: Option<String>,

    /// Filter parameter (defaults per filter).
    #[arg(long)]
    filter_amount: Option<f32>,

    /// Treat the input as a raw sensor frame from this camera and bring
    /// it upright first: front or back.
    #[arg(long)]
    facing: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let reader = ImageFileReader::new();
    let mut frame = reader.read(&cli.input)?;
    if let Some(facing) = parse_facing(cli.facing.as_deref())? {
        frame = orient_for_detection(&frame, facing);
    }

    let detector = build_detector(cli.boxes.clone());

    if let Some(view) = cli.overlay.as_deref() {
        run_overlay(&frame, detector, parse_view_size(view)?)
    } else if let Some(crops_dir) = cli.crops {
        run_crops(&frame, detector, &crops_dir)
    } else {
        let filter = parse_filter(cli.filter.as_deref(), cli.filter_amount)?;
        let output = cli
            .output
            .as_deref()
            .ok_or("Output file is required unless --overlay or --crops is used")?;
        run_swap(&frame, detector, filter, output)
    }
}

fn run_overlay(
    frame: &Frame,
    detector: Box<dyn FaceDetector>,
    (view_w, view_h): (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let mut use_case = OverlayFacesUseCase::new(detector, view_w, view_h);
    match use_case.execute(frame)? {
        OverlayUpdate::Clear => println!("clear"),
        OverlayUpdate::Draw(rects) => {
            for r in rects {
                println!("{},{},{},{}", r.left, r.top, r.right, r.bottom);
            }
        }
    }
    Ok(())
}

fn run_crops(
    frame: &Frame,
    detector: Box<dyn FaceDetector>,
    crops_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let writer: Box<dyn ImageWriter> = Box::new(ImageFileWriter::new());
    let mut use_case = ExtractFacesUseCase::new(detector, writer);
    let written = use_case.execute(frame, crops_dir)?;
    log::info!("Saved {} face crops to {}", written.len(), crops_dir.display());
    Ok(())
}

fn run_swap(
    frame: &Frame,
    detector: Box<dyn FaceDetector>,
    filter: Option<FilterKind>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut use_case = SwapFrameUseCase::new(detector, Box::new(CpuSwapCompositor::new()));
    let mut composited = use_case.execute(frame)?;

    if let Some(filter) = filter {
        filter.apply(&mut composited);
    }

    ImageFileWriter::new().write(output, &composited)?;
    log::info!("Output written to {}", output.display());
    Ok(())
}

/// Wraps the --boxes list as a detector with the external engine's flat
/// sequence convention (count followed by coordinates).
fn build_detector(boxes: Vec<i32>) -> Box<dyn FaceDetector> {
    let mut sequence = vec![(boxes.len() / 4) as i32];
    sequence.extend_from_slice(&boxes);
    Box::new(FlatSequenceDetector::new(Box::new(move |_, _, _, _| {
        sequence.clone()
    })))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.boxes.len() % 4 != 0 {
        return Err(format!(
            "--boxes needs 4 values per face, got {}",
            cli.boxes.len()
        )
        .into());
    }
    if cli.overlay.is_some() && cli.crops.is_some() {
        return Err("--overlay and --crops are mutually exclusive".into());
    }
    if cli.overlay.is_none() && cli.crops.is_none() && cli.output.is_none() {
        return Err("Output file is required unless --overlay or --crops is used".into());
    }
    Ok(())
}

fn parse_view_size(view: &str) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let err = || format!("View size must be WxH with positive dimensions, got '{view}'");
    let (w, h) = view.split_once('x').ok_or_else(err)?;
    let w: u32 = w.parse().map_err(|_| err())?;
    let h: u32 = h.parse().map_err(|_| err())?;
    if w == 0 || h == 0 {
        return Err(err().into());
    }
    Ok((w, h))
}

fn parse_facing(facing: Option<&str>) -> Result<Option<CameraFacing>, Box<dyn std::error::Error>> {
    match facing {
        None => Ok(None),
        Some("front") => Ok(Some(CameraFacing::Front)),
        Some("back") => Ok(Some(CameraFacing::Back)),
        Some(other) => Err(format!("Facing must be 'front' or 'back', got '{other}'").into()),
    }
}

fn parse_filter(
    name: Option<&str>,
    amount: Option<f32>,
) -> Result<Option<FilterKind>, Box<dyn std::error::Error>> {
    let Some(name) = name else {
        return Ok(None);
    };
    let filter = match name {
        "grayscale" => FilterKind::Grayscale,
        "brightness" => FilterKind::Brightness(amount.unwrap_or(DEFAULT_BRIGHTNESS)),
        "contrast" => FilterKind::Contrast(amount.unwrap_or(DEFAULT_CONTRAST)),
        "gamma" => FilterKind::Gamma(amount.unwrap_or(DEFAULT_GAMMA)),
        "pixelation" => FilterKind::Pixelation(amount.unwrap_or(DEFAULT_PIXELATION)),
        other => {
            return Err(format!(
                "Filter must be one of: grayscale, brightness, contrast, gamma, pixelation, got '{other}'"
            )
            .into())
        }
    };
    Ok(Some(filter))
}
