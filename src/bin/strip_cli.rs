#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("strip_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use mobius_engine::geom::{StripParams, estimate_edge_length, estimate_surface_area, sample_grid};
    use std::fmt::Write as _;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SNAPSHOT_QUANTIZE: f64 = 1e-6;
    const SNAPSHOT_DECIMALS: usize = 6;

    /// Parameter triples for `report` without arguments, covering the
    /// interesting corners of the suggested control ranges.
    const REPORT_SWEEP: &[(f64, f64, usize)] = &[
        (3.0, 1.0, 100),
        (2.0, 0.5, 100),
        (4.0, 1.5, 100),
        (3.0, 2.0, 100),
    ];

    const USAGE: &str = r#"strip_cli (mobius-engine)

USAGE:
  strip_cli report [<radius> <width> <resolution>]
  strip_cli grid <radius> <width> <resolution> [options]

COMMANDS:
  report    Print surface area and edge length; without arguments, runs
            a small built-in parameter sweep
  grid      Print the sampled point grid as a quantized snapshot

OPTIONS (grid):
  --out <path>       Write the snapshot to a file instead of stdout
  --overwrite        Overwrite an existing output file
  -h, --help         Show this help
"#;

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "report" => cmd_report(&mut args),
            "grid" => cmd_grid(&mut args),
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn cmd_report(args: &mut Args) -> Result<(), String> {
        let triples: Vec<(f64, f64, usize)> = match args.next() {
            Some(first) => {
                let radius = parse_f64("radius", &first)?;
                let width = parse_f64("width", &args.value("width")?)?;
                let resolution = parse_usize("resolution", &args.value("resolution")?)?;
                vec![(radius, width, resolution)]
            }
            None => REPORT_SWEEP.to_vec(),
        };

        for (radius, width, resolution) in triples {
            let params =
                StripParams::new(radius, width, resolution).map_err(|e| e.to_string())?;
            let area = estimate_surface_area(&params);
            let edge = estimate_edge_length(&params);

            println!("R={radius} w={width} n={resolution}");
            println!("  surface_area {area:.6}");
            println!("  edge_length  {:.6}", edge.total);
            println!(
                "  rails        lower={:.6} upper={:.6}",
                edge.lower_rail, edge.upper_rail
            );
        }

        Ok(())
    }

    fn cmd_grid(args: &mut Args) -> Result<(), String> {
        let radius = parse_f64("radius", &args.value("radius")?)?;
        let width = parse_f64("width", &args.value("width")?)?;
        let resolution = parse_usize("resolution", &args.value("resolution")?)?;

        let mut out_path: Option<PathBuf> = None;
        let mut overwrite = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => out_path = Some(PathBuf::from(args.value("--out")?)),
                "--overwrite" => overwrite = true,
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let params = StripParams::new(radius, width, resolution).map_err(|e| e.to_string())?;
        let snap = grid_snapshot(&params);

        if let Some(path) = out_path.as_deref() {
            write_text_file(path, &snap, overwrite)?;
            eprintln!("wrote {}", path.display());
        } else {
            print!("{snap}");
        }

        Ok(())
    }

    fn grid_snapshot(params: &StripParams) -> String {
        let grid = sample_grid(params);
        let bounds = grid.bounds();

        let mut out = String::new();
        let _ = writeln!(out, "# mobius-engine grid v1");
        let _ = writeln!(
            out,
            "params {} {} {}",
            params.radius, params.width, params.resolution
        );
        let _ = writeln!(out, "quantize {SNAPSHOT_QUANTIZE:.1e}");
        let _ = writeln!(out, "resolution {}", grid.resolution());
        write_vec3_line(&mut out, "bounds.min", bounds.min.to_array());
        write_vec3_line(&mut out, "bounds.max", bounds.max.to_array());
        let _ = writeln!(out, "points {}", grid.points().len());
        for point in grid.points() {
            write_vec3_line(&mut out, "p", point.to_array());
        }
        normalize_snapshot_text(&out)
    }

    fn write_text_file(path: &Path, text: &str, overwrite: bool) -> Result<(), String> {
        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }
        fs::write(path, normalize_snapshot_text(text)).map_err(|e| format!("write {}: {e}", path.display()))
    }

    fn normalize_snapshot_text(text: &str) -> String {
        let normalized = text.replace("\r\n", "\n");
        if normalized.ends_with('\n') {
            normalized
        } else {
            format!("{normalized}\n")
        }
    }

    fn quantize_f64(value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let value = if value == -0.0 { 0.0 } else { value };
        let q = (value / SNAPSHOT_QUANTIZE).round() * SNAPSHOT_QUANTIZE;
        if q == -0.0 { 0.0 } else { q }
    }

    fn write_f64(out: &mut String, value: f64) {
        let value = quantize_f64(value);
        let _ = write!(out, "{value:.SNAPSHOT_DECIMALS$}");
    }

    fn write_vec3_line(out: &mut String, prefix: &str, v: [f64; 3]) {
        let _ = write!(out, "{prefix} ");
        write_f64(out, v[0]);
        out.push(' ');
        write_f64(out, v[1]);
        out.push(' ');
        write_f64(out, v[2]);
        out.push('\n');
    }

    fn parse_f64(name: &str, raw: &str) -> Result<f64, String> {
        raw.parse::<f64>()
            .map_err(|_| format!("invalid {name} `{raw}` (expected a number)"))
    }

    fn parse_usize(name: &str, raw: &str) -> Result<usize, String> {
        raw.parse::<usize>()
            .map_err(|_| format!("invalid {name} `{raw}` (expected a positive integer)"))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }
    }
}
