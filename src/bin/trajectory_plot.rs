use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use firehose_rust::core::kinematics::{self, EARTH_GRAVITY_MPS2, LaunchParameters};
use firehose_rust::core::window::equal_scale_axis_window;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the water stream trajectory from hose to building as a PNG chart"
)]
struct Cli {
    #[arg(long, default_value_t = 25.0)]
    speed: f64,
    #[arg(long, default_value_t = EARTH_GRAVITY_MPS2)]
    gravity: f64,
    #[arg(long, default_value_t = 45.0)]
    distance: f64,
    #[arg(long, default_value_t = 3.0)]
    time: f64,
    #[arg(long, default_value_t = 200)]
    samples: usize,
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn default_output_path() -> PathBuf {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("artifacts/trajectory-{stamp}.png"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let params = LaunchParameters {
        initial_speed_mps: cli.speed,
        gravity_mps2: cli.gravity,
        target_distance_m: cli.distance,
        time_of_flight_s: cli.time,
    };
    let solution = kinematics::solve(params, cli.samples)?;

    let output = cli.output.unwrap_or_else(default_output_path);
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let raw_max_y = solution
        .samples
        .iter()
        .fold(0.0f64, |acc, sample| acc.max(sample.y_m));
    let aspect = f64::from(cli.width) / f64::from(cli.height.max(1));
    let (x_span, y_span) =
        equal_scale_axis_window(params.target_distance_m, raw_max_y, aspect);

    let root = BitMapBackend::new(&output, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!(
        "Water Stream Trajectory (launch angle {:.1}°)",
        solution.angle_rad.to_degrees()
    );
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 28))
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_span, 0.0..y_span)?;

    chart
        .configure_mesh()
        .x_desc("Horizontal Distance (m)")
        .y_desc("Vertical Height (m)")
        .label_style(("sans-serif", 16))
        .draw()?;

    let ground_color = RGBColor(139, 94, 60);
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (x_span, 0.0)],
            ground_color.stroke_width(2),
        )))?
        .label("Ground level")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], ground_color.stroke_width(2))
        });

    let wall_color = RGBColor(120, 120, 120);
    chart
        .draw_series(DashedLineSeries::new(
            [
                (solution.impact.x_m, 0.0),
                (solution.impact.x_m, solution.impact.y_m.max(0.0)),
            ],
            6,
            4,
            wall_color.stroke_width(1),
        ))?
        .label("Building wall")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], wall_color.stroke_width(1))
        });

    chart
        .draw_series(LineSeries::new(
            solution.samples.iter().map(|sample| (sample.x_m, sample.y_m)),
            BLUE.stroke_width(2),
        ))?
        .label("Water stream")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(std::iter::once(Circle::new((0.0, 0.0), 5, GREEN.filled())))?
        .label("Hose exit")
        .legend(|(x, y)| Circle::new((x + 9, y), 4, GREEN.filled()));

    chart
        .draw_series(std::iter::once(Circle::new(
            (solution.impact.x_m, solution.impact.y_m),
            5,
            RED.filled(),
        )))?
        .label(format!("Impact ({:.1} m high)", solution.impact.y_m))
        .legend(|(x, y)| Circle::new((x + 9, y), 4, RED.filled()));

    // The apex is only drawn when it falls inside the flight window; a
    // still-rising stream peaks past the building.
    if solution.apex.time_s <= params.time_of_flight_s {
        chart
            .draw_series(std::iter::once(Cross::new(
                (solution.apex.x_m, solution.apex.y_m),
                6,
                BLACK.stroke_width(2),
            )))?
            .label(format!("Apex ({:.1} m high)", solution.apex.y_m))
            .legend(|(x, y)| Cross::new((x + 9, y), 4, BLACK.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font(("sans-serif", 16))
        .draw()?;

    root.present()?;
    println!("Chart written to {}", output.display());

    Ok(())
}
