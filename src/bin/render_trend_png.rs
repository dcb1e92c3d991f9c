use risk_trend_chart::api::{DEFAULT_HEIGHT, DEFAULT_WIDTH, TrendChart, TrendChartProps};
use risk_trend_chart::core::TrendInput;
use risk_trend_chart::render::CairoRenderer;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_path: PathBuf,
    width: u32,
    height: u32,
    assessment: bool,
}

fn main() {
    let _ = risk_trend_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input_path).map_err(|err| {
        format!(
            "failed to read input `{}`: {err}",
            args.input_path.display()
        )
    })?;

    let data = if args.assessment {
        TrendInput::from_assessment_json(&raw)
    } else {
        TrendInput::from_json(&raw).map(Some)
    }
    .map_err(|err| err.to_string())?;

    let props = TrendChartProps::new(data).with_size(args.width, args.height);
    let chart = TrendChart::new(props).map_err(|err| format!("chart init failed: {err}"))?;

    let width = i32::try_from(args.width).map_err(|_| "width overflows i32".to_owned())?;
    let height = i32::try_from(args.height).map_err(|_| "height overflows i32".to_owned())?;
    let mut renderer = CairoRenderer::new(width, height)
        .map_err(|err| format!("renderer init failed: {err}"))?;
    chart
        .draw(Some(&mut renderer))
        .map_err(|err| format!("render failed: {err}"))?;

    if let Some(parent) = args.output_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create output dir `{}`: {err}", parent.display()))?;
    }
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create png `{}`: {err}",
            args.output_path.display()
        )
    })?;
    renderer
        .write_png(&mut file)
        .map_err(|err| format!("failed to write png `{}`: {err}", args.output_path.display()))?;

    info!(
        state = chart.state().name(),
        output = %args.output_path.display(),
        "trend chart written"
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from("risk_trend.png");
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut assessment = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--width" => width = parse_dimension("--width", args.next())?,
            "--height" => height = parse_dimension("--height", args.next())?,
            "--assessment" => assessment = true,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let input_path =
        input_path.ok_or_else(|| format!("missing --input\n\n{}", usage_message()))?;
    Ok(CliArgs {
        input_path,
        output_path,
        width,
        height,
        assessment,
    })
}

fn parse_dimension(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(format!("{flag} must be a positive integer, got `{value}`")),
    }
}

fn usage_message() -> String {
    format!(
        "usage: render_trend_png --input <trend.json> [--output <file.png>] \
         [--width <px>] [--height <px>] [--assessment]\n\
         \n\
         --assessment  read `trend_analysis.trend_data` from a full assessment response\n\
         defaults: --output risk_trend.png --width {DEFAULT_WIDTH} --height {DEFAULT_HEIGHT}"
    )
}
