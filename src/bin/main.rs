use foilgen::{bezier, naca, Airfoil, AirfoilError, BezierParams, NacaParams};
use ncollide2d::na::Point2;
use std::process::ExitCode;

const USAGE: &str = "usage: foilgen <designator|bezier> [--points N] [--spacing equal|cosine] [--sharp-te]";

fn parse_args(args: &[String]) -> Result<(String, NacaParams), String> {
    let mut iter = args.iter();
    let profile = iter.next().ok_or(USAGE)?.clone();
    let mut params = NacaParams::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--points" => {
                let v = iter.next().ok_or("--points needs a value")?;
                params.points = v.parse().map_err(|_| format!("invalid point count '{v}'"))?;
            }
            "--spacing" => {
                let v = iter.next().ok_or("--spacing needs a value")?;
                params.spacing = v.parse().map_err(|e: AirfoilError| e.to_string())?;
            }
            "--sharp-te" => params.finite_te = false,
            _ => return Err(format!("unexpected argument '{arg}'\n{USAGE}")),
        }
    }

    Ok((profile, params))
}

/// A cambered demonstration profile with separate upper and lower control points
fn demo_bezier(params: &NacaParams) -> Result<Airfoil, AirfoilError> {
    let top = [
        Point2::new(0.19, 0.17),
        Point2::new(0.5, 0.2),
        Point2::new(0.81, 0.1),
    ];
    let bottom = [
        Point2::new(0.085, -0.02),
        Point2::new(0.3, 0.06),
        Point2::new(0.6, 0.08),
    ];
    let bezier_params = BezierParams {
        points: params.points,
        spacing: params.spacing,
        ..BezierParams::default()
    };

    bezier(&[0.05, 0.02], &top, Some(&bottom[..]), &bezier_params)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (profile, params) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let airfoil = if profile == "bezier" {
        demo_bezier(&params)
    } else {
        naca(&profile, &params)
    };

    match airfoil.map(|a| serde_json::to_string_pretty(&a)) {
        Ok(Ok(json)) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            eprintln!("failed serializing airfoil: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
