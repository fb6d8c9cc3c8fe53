use std::env;
use std::io::{self, Write};

use firehose_rust::core::kinematics::{
    self, EARTH_GRAVITY_MPS2, LaunchParameters,
};

const SAMPLE_COUNT: usize = 200;

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_params_from_user() -> Result<LaunchParameters, String> {
    Ok(LaunchParameters {
        initial_speed_mps: read_f64("Initial speed (m/s): ")?,
        target_distance_m: read_f64("Distance to building (m): ")?,
        time_of_flight_s: read_f64("Time of flight (s): ")?,
        gravity_mps2: EARTH_GRAVITY_MPS2,
    })
}

fn get_params_from_args(args: &[String]) -> Result<LaunchParameters, String> {
    if args.len() != 4 && args.len() != 5 {
        return Err(
            "Expected 3 or 4 arguments: <speed_mps> <distance_m> <time_s> [gravity_mps2]."
                .to_string(),
        );
    }

    let gravity_mps2 = if args.len() == 5 {
        parse_f64(&args[4], "gravity")?
    } else {
        EARTH_GRAVITY_MPS2
    };

    Ok(LaunchParameters {
        initial_speed_mps: parse_f64(&args[1], "speed")?,
        target_distance_m: parse_f64(&args[2], "distance")?,
        time_of_flight_s: parse_f64(&args[3], "time")?,
        gravity_mps2,
    })
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <speed_mps> <distance_m> <time_s> [gravity_mps2]");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 25 45 3");
    println!("  {program} 25 45 3 9.8");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let params = if args.len() == 1 {
        get_params_from_user()?
    } else {
        get_params_from_args(&args)?
    };

    let solution = kinematics::solve(params, SAMPLE_COUNT).map_err(|e| e.to_string())?;

    println!();
    println!(
        "Launch angle: {:.2} deg ({:.4} rad)",
        solution.angle_rad.to_degrees(),
        solution.angle_rad
    );
    println!(
        "Velocity components: vx = {:.4} m/s, vy = {:.4} m/s",
        solution.velocity.horizontal_mps, solution.velocity.vertical_mps
    );
    println!(
        "Impact height at {:.2} m: {:.4} m",
        solution.impact.x_m, solution.impact.y_m
    );
    println!(
        "Apex: {:.4} m high at x = {:.2} m, t = {:.4} s",
        solution.apex.y_m, solution.apex.x_m, solution.apex.time_s
    );
    if solution.apex.time_s > params.time_of_flight_s {
        println!("Note: the stream is still rising at impact; the apex lies past the building.");
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
